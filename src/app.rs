//! Palcare Frontend App
//!
//! Application shell: provides the store and context, owns the notification
//! counts poll, and switches between the dashboard panels.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    AssignmentList, DashboardPanel, FlashMessage, NotificationPanel, RoleTabBar, ScheduleList,
    TaskList, TeamList,
};
use crate::context::AppContext;
use crate::models::Role;
use crate::store::{store_replace_counts, use_app_store, AppState, AppStateStoreFields};

/// Counts poll interval; each tick wholly replaces local counts
const COUNTS_POLL_MS: u32 = 10_000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Panel {
    Dashboard,
    Tasks,
    Schedules,
    Assignments,
    Team,
    Notifications,
}

impl Panel {
    const ALL: [Panel; 6] = [
        Panel::Dashboard,
        Panel::Tasks,
        Panel::Schedules,
        Panel::Assignments,
        Panel::Team,
        Panel::Notifications,
    ];

    fn label(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Tasks => "Tasks",
            Panel::Schedules => "Schedule",
            Panel::Assignments => "Assignments",
            Panel::Team => "Team",
            Panel::Notifications => "Notifications",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (active_panel, set_active_panel) = signal(Panel::Dashboard);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_role, set_current_role) = signal(Role::Volunteer);
    let (flash, set_flash) = signal::<Option<String>>(None);

    // Provide store and context to all children
    provide_context(Store::new(AppState::default()));
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (current_role, set_current_role),
        (flash, set_flash),
    ));

    let store = use_app_store();

    // Counts poll: fetch once on mount, then every tick. Poll failures are
    // logged but not flashed; the next tick retries anyway.
    let poll_counts = move || {
        spawn_local(async move {
            match api::notification_counts().await {
                Ok(counts) => store_replace_counts(&store, counts),
                Err(err) => {
                    web_sys::console::warn_1(&format!("counts poll failed: {}", err).into())
                }
            }
        });
    };
    poll_counts();
    // The interval holds a non-Send JS closure, so it lives in a local-arena
    // slot; cleanup clears the slot, dropping and cancelling the timer.
    let poll = StoredValue::new_local(Some(Interval::new(COUNTS_POLL_MS, poll_counts)));
    on_cleanup(move || {
        poll.set_value(None);
    });

    let unread_total = move || store.counts().get().total();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Palcare"</h1>
                <RoleTabBar />
            </header>

            <FlashMessage />

            <nav class="panel-nav">
                {Panel::ALL
                    .into_iter()
                    .map(|panel| {
                        let nav_class = move || {
                            if active_panel.get() == panel { "panel-nav-btn active" } else { "panel-nav-btn" }
                        };
                        view! {
                            <button class=nav_class on:click=move |_| set_active_panel.set(panel)>
                                {panel.label()}
                                {(panel == Panel::Notifications)
                                    .then(|| view! {
                                        <span class="unread-badge">{unread_total}</span>
                                    })}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class="main-content">
                {move || match active_panel.get() {
                    Panel::Dashboard => view! { <DashboardPanel /> }.into_any(),
                    Panel::Tasks => view! { <TaskList /> }.into_any(),
                    Panel::Schedules => view! { <ScheduleList /> }.into_any(),
                    Panel::Assignments => view! { <AssignmentList /> }.into_any(),
                    Panel::Team => view! { <TeamList /> }.into_any(),
                    Panel::Notifications => view! { <NotificationPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
