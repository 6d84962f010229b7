//! UI Components
//!
//! Leptos components for the dashboard panels.

mod assignment_list;
mod dashboard_panel;
mod flash_message;
mod notification_panel;
mod patient_panel;
mod role_tab_bar;
mod schedule_list;
mod task_list;
mod team_list;

pub use assignment_list::AssignmentList;
pub use dashboard_panel::DashboardPanel;
pub use flash_message::FlashMessage;
pub use notification_panel::NotificationPanel;
pub use patient_panel::PatientPanel;
pub use role_tab_bar::RoleTabBar;
pub use schedule_list::ScheduleList;
pub use task_list::TaskList;
pub use team_list::TeamList;
