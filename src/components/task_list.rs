//! Task List Component
//!
//! Filterable/sortable task view. Filtering and ordering are delegated to
//! the pure projection in `listview`; this component only owns the raw
//! collection, the selected view parameters, and the per-task in-flight set
//! for status toggles.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{is_mounted, mount_flag, AppContext};
use crate::listview::{project_tasks, SortDirection, TaskQuery};
use crate::models::{Task, TaskPriority, TaskStatus};

fn priority_from_value(value: &str) -> Option<TaskPriority> {
    match value {
        "low" => Some(TaskPriority::Low),
        "medium" => Some(TaskPriority::Medium),
        "high" => Some(TaskPriority::High),
        _ => None, // "all"
    }
}

fn status_from_value(value: &str) -> Option<TaskStatus> {
    match value {
        "pending" => Some(TaskStatus::Pending),
        "completed" => Some(TaskStatus::Completed),
        _ => None,
    }
}

fn priority_label(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "low",
        TaskPriority::Medium => "medium",
        TaskPriority::High => "high",
    }
}

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let alive = mount_flag();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (priority_filter, set_priority_filter) = signal::<Option<TaskPriority>>(None);
    let (status_filter, set_status_filter) = signal::<Option<TaskStatus>>(None);
    let (direction, set_direction) = signal(SortDirection::Ascending);
    // Task ids with a status flip in flight; only those rows are disabled
    let (in_flight, set_in_flight) = signal(HashSet::<u32>::new());

    // Load tasks when role or trigger changes
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let role = ctx.current_role.get();
        spawn_local(async move {
            match api::list_tasks(role).await {
                Ok(loaded) => {
                    if is_mounted(alive) {
                        set_tasks.set(loaded);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to load tasks: {}", err));
                    }
                }
            }
        });
    });

    let projected = move || {
        let query = TaskQuery {
            priority: priority_filter.get(),
            status: status_filter.get(),
            direction: direction.get(),
        };
        project_tasks(&tasks.get(), &query)
    };

    let on_toggle = move |task: Task| {
        if in_flight.get_untracked().contains(&task.id) {
            return;
        }
        set_in_flight.update(|s| {
            s.insert(task.id);
        });
        spawn_local(async move {
            let result = api::set_task_status(task.id, task.status.flipped()).await;
            if !is_mounted(alive) {
                return;
            }
            set_in_flight.update(|s| {
                s.remove(&task.id);
            });
            match result {
                // Replace with the server-confirmed task rather than trusting
                // the optimistic flip; the server may have moved it elsewhere.
                Ok(confirmed) => set_tasks.update(|list| {
                    if let Some(t) = list.iter_mut().find(|t| t.id == confirmed.id) {
                        *t = confirmed;
                    }
                }),
                Err(err) => ctx.flash_error(format!("Failed to update task: {}", err)),
            }
        });
    };

    view! {
        <section class="panel task-panel">
            <div class="panel-header">
                <h2>"Tasks"</h2>
                <div class="task-filters">
                    <select on:change=move |ev| {
                        set_priority_filter.set(priority_from_value(&event_target_value(&ev)));
                    }>
                        <option value="all">"All priorities"</option>
                        <option value="low">"Low"</option>
                        <option value="medium">"Medium"</option>
                        <option value="high">"High"</option>
                    </select>
                    <select on:change=move |ev| {
                        set_status_filter.set(status_from_value(&event_target_value(&ev)));
                    }>
                        <option value="all">"All statuses"</option>
                        <option value="pending">"Pending"</option>
                        <option value="completed">"Completed"</option>
                    </select>
                    <select on:change=move |ev| {
                        set_direction.set(match event_target_value(&ev).as_str() {
                            "desc" => SortDirection::Descending,
                            _ => SortDirection::Ascending,
                        });
                    }>
                        <option value="asc">"Due date ↑"</option>
                        <option value="desc">"Due date ↓"</option>
                    </select>
                </div>
            </div>

            <For
                each=projected
                // Status and due date are mutable; key on them so a confirmed
                // flip re-renders the row
                key=|task| (task.id, task.status, task.due_date.clone())
                children=move |task: Task| {
                    let id = task.id;
                    let status = task.status;
                    let is_busy = move || in_flight.get().contains(&id);
                    let toggle_task = task.clone();
                    let toggle_label = match status {
                        TaskStatus::Pending => "Mark done",
                        TaskStatus::Completed => "Reopen",
                    };
                    view! {
                        <div class="task-row" class:completed=move || status == TaskStatus::Completed>
                            <span class=format!("task-priority {}", priority_label(task.priority))>
                                {priority_label(task.priority)}
                            </span>
                            <span class="task-title">{task.title.clone()}</span>
                            {task.description.clone().map(|d| view! {
                                <span class="task-description">{d}</span>
                            })}
                            <span class="task-due">{task.due_date.clone()}</span>
                            {task.assignee.clone().map(|a| view! {
                                <span class="task-assignee">{a}</span>
                            })}
                            <button
                                class="task-toggle"
                                disabled=is_busy
                                on:click=move |_| on_toggle(toggle_task.clone())
                            >
                                {toggle_label}
                            </button>
                        </div>
                    }
                }
            />

            {move || if projected().is_empty() {
                view! { <div class="empty-message">"No tasks match the current filters"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </section>
    }
}
