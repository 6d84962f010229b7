//! List View-Model Layer
//!
//! Pure filter/sort projections feeding the task and schedule views. Every
//! function here is a plain function of its inputs: rendering the same
//! collection with the same parameters always yields the same view, so the
//! UI can recompute on every signal change without a derived cache.

use chrono::{Days, NaiveDate, NaiveTime};

use crate::models::{ScheduleEntry, Task, TaskPriority, TaskStatus};

/// Sort direction for the due-date ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// User-selected view parameters for the task list.
///
/// `None` filters are the UI's "all" selection. The two predicates are
/// independent and combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaskQuery {
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub direction: SortDirection,
}

/// Parse a "YYYY-MM-DD" calendar date.
///
/// Unparseable dates map to `NaiveDate::MIN` so ordering stays total and
/// deterministic: bad dates sort before every real date ascending, after
/// them descending.
pub fn parse_date_or_min(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or(NaiveDate::MIN)
}

/// Parse a "HH:MM" (or "HH:MM:SS") time of day, falling back to midnight.
pub fn parse_time_or_midnight(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .unwrap_or(NaiveTime::MIN)
}

/// Project the raw task collection into the displayed view.
///
/// Filters by the query's priority/status selections, then stable-sorts by
/// due date in the selected direction; ties keep input order.
pub fn project_tasks(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| query.priority.is_none_or(|p| task.priority == p))
        .filter(|task| query.status.is_none_or(|s| task.status == s))
        .cloned()
        .collect();

    match query.direction {
        SortDirection::Ascending => view.sort_by_key(|t| parse_date_or_min(&t.due_date)),
        SortDirection::Descending => {
            view.sort_by(|a, b| parse_date_or_min(&b.due_date).cmp(&parse_date_or_min(&a.due_date)))
        }
    }
    view
}

/// Time window for the schedule view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleWindow {
    Today,
    #[default]
    ThisWeek,
    All,
}

impl ScheduleWindow {
    /// Map a window `<select>` value; unknown values widen to All.
    pub fn from_value(value: &str) -> Self {
        match value {
            "today" => ScheduleWindow::Today,
            "week" => ScheduleWindow::ThisWeek,
            _ => ScheduleWindow::All,
        }
    }

    pub fn as_value(self) -> &'static str {
        match self {
            ScheduleWindow::Today => "today",
            ScheduleWindow::ThisWeek => "week",
            ScheduleWindow::All => "all",
        }
    }
}

/// Project the raw schedule collection into the displayed view.
///
/// Keeps entries whose visit date falls in the selected window relative to
/// `today` (ThisWeek spans today through today + 7 days, both days included
/// whole), then sorts ascending by (visit date, visit time). `today` is a
/// parameter so callers inject the clock and the projection stays pure.
pub fn project_schedules(
    schedules: &[ScheduleEntry],
    window: ScheduleWindow,
    today: NaiveDate,
) -> Vec<ScheduleEntry> {
    let week_end = today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);

    let mut view: Vec<ScheduleEntry> = schedules
        .iter()
        .filter(|entry| {
            let date = parse_date_or_min(&entry.visit_date);
            match window {
                ScheduleWindow::Today => date == today,
                ScheduleWindow::ThisWeek => today <= date && date <= week_end,
                ScheduleWindow::All => true,
            }
        })
        .cloned()
        .collect();

    view.sort_by_key(|entry| {
        (
            parse_date_or_min(&entry.visit_date),
            parse_time_or_midnight(&entry.visit_time),
        )
    });
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, due: &str, priority: TaskPriority, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            due_date: due.to_string(),
            priority,
            status,
            assignee: None,
        }
    }

    fn make_visit(id: u32, date: &str, time: &str) -> ScheduleEntry {
        ScheduleEntry {
            id,
            patient_name: format!("Patient {}", id),
            member_name: "Volunteer".to_string(),
            visit_date: date.to_string(),
            visit_time: time.to_string(),
            visit_type: "Routine".to_string(),
            notes: None,
            created_at: "2026-08-01T09:00:00Z".to_string(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_task_filters_are_independent_and_anded() {
        let tasks = vec![
            make_task(1, "2026-09-01", TaskPriority::High, TaskStatus::Pending),
            make_task(2, "2026-09-02", TaskPriority::High, TaskStatus::Completed),
            make_task(3, "2026-09-03", TaskPriority::Low, TaskStatus::Pending),
        ];

        let query = TaskQuery {
            priority: Some(TaskPriority::High),
            status: Some(TaskStatus::Pending),
            direction: SortDirection::Ascending,
        };
        assert_eq!(ids(&project_tasks(&tasks, &query)), vec![1]);

        // Each predicate alone
        let by_priority = TaskQuery { priority: Some(TaskPriority::High), ..Default::default() };
        assert_eq!(ids(&project_tasks(&tasks, &by_priority)), vec![1, 2]);
        let by_status = TaskQuery { status: Some(TaskStatus::Pending), ..Default::default() };
        assert_eq!(ids(&project_tasks(&tasks, &by_status)), vec![1, 3]);

        // "all"/"all" keeps everything
        assert_eq!(project_tasks(&tasks, &TaskQuery::default()).len(), 3);
    }

    #[test]
    fn test_task_sort_both_directions() {
        let tasks = vec![
            make_task(1, "2026-09-10", TaskPriority::Medium, TaskStatus::Pending),
            make_task(2, "2026-09-01", TaskPriority::Medium, TaskStatus::Pending),
            make_task(3, "2026-09-05", TaskPriority::Medium, TaskStatus::Pending),
        ];

        let asc = TaskQuery { direction: SortDirection::Ascending, ..Default::default() };
        assert_eq!(ids(&project_tasks(&tasks, &asc)), vec![2, 3, 1]);

        let desc = TaskQuery { direction: SortDirection::Descending, ..Default::default() };
        assert_eq!(ids(&project_tasks(&tasks, &desc)), vec![1, 3, 2]);
    }

    #[test]
    fn test_task_sort_is_stable_on_equal_dates() {
        let tasks = vec![
            make_task(1, "2026-09-01", TaskPriority::Low, TaskStatus::Pending),
            make_task(2, "2026-09-01", TaskPriority::Low, TaskStatus::Pending),
            make_task(3, "2026-09-01", TaskPriority::Low, TaskStatus::Pending),
        ];
        let query = TaskQuery::default();
        assert_eq!(ids(&project_tasks(&tasks, &query)), vec![1, 2, 3]);
    }

    #[test]
    fn test_unparseable_due_date_sorts_first_ascending() {
        let tasks = vec![
            make_task(1, "2026-09-01", TaskPriority::Low, TaskStatus::Pending),
            make_task(2, "not-a-date", TaskPriority::Low, TaskStatus::Pending),
        ];
        let asc = TaskQuery::default();
        assert_eq!(ids(&project_tasks(&tasks, &asc)), vec![2, 1]);
        let desc = TaskQuery { direction: SortDirection::Descending, ..Default::default() };
        assert_eq!(ids(&project_tasks(&tasks, &desc)), vec![1, 2]);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let tasks = vec![
            make_task(1, "2026-09-10", TaskPriority::High, TaskStatus::Pending),
            make_task(2, "2026-09-01", TaskPriority::High, TaskStatus::Completed),
            make_task(3, "2026-09-05", TaskPriority::Low, TaskStatus::Pending),
        ];
        let query = TaskQuery {
            priority: Some(TaskPriority::High),
            status: None,
            direction: SortDirection::Ascending,
        };
        let once = project_tasks(&tasks, &query);
        let twice = project_tasks(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_schedule_this_week_window() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let schedules = vec![
            make_visit(1, "2026-08-30", "14:00"),
            make_visit(2, "2026-09-02", "09:00"),
            make_visit(3, "2026-09-09", "10:00"), // today + 10, outside
        ];

        let view = project_schedules(&schedules, ScheduleWindow::ThisWeek, today);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].id, 1);
        assert_eq!(view[1].id, 2);
    }

    #[test]
    fn test_schedule_week_end_boundary_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let schedules = vec![
            make_visit(1, "2026-09-06", "23:55"), // today + 7, last included day
            make_visit(2, "2026-09-07", "00:05"), // today + 8
        ];
        let view = project_schedules(&schedules, ScheduleWindow::ThisWeek, today);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_schedule_today_window_sorted_by_time() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let schedules = vec![
            make_visit(1, "2026-08-30", "16:30"),
            make_visit(2, "2026-08-31", "08:00"),
            make_visit(3, "2026-08-30", "09:15"),
        ];
        let view = project_schedules(&schedules, ScheduleWindow::Today, today);
        assert_eq!(view.iter().map(|v| v.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_schedule_all_window_keeps_everything_sorted() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let schedules = vec![
            make_visit(1, "2026-09-09", "10:00"),
            make_visit(2, "garbage", "08:00"),
            make_visit(3, "2026-08-01", "12:00"),
        ];
        let view = project_schedules(&schedules, ScheduleWindow::All, today);
        // Unparseable date sorts first (minimum sentinel), then by real date.
        assert_eq!(view.iter().map(|v| v.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }
}
