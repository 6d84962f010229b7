//! Schedule List Component
//!
//! Visit schedule with a time-window selector (today / this week / all).
//! Window filtering and (date, time) ordering live in the pure projection;
//! the clock is read once per render and injected.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{is_mounted, mount_flag, AppContext};
use crate::listview::{project_schedules, ScheduleWindow};
use crate::models::ScheduleEntry;

#[component]
pub fn ScheduleList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let alive = mount_flag();

    let (schedules, set_schedules) = signal(Vec::<ScheduleEntry>::new());
    let (window, set_window) = signal(ScheduleWindow::ThisWeek);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let role = ctx.current_role.get();
        spawn_local(async move {
            match api::list_schedules(role).await {
                Ok(loaded) => {
                    if is_mounted(alive) {
                        set_schedules.set(loaded);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to load schedules: {}", err));
                    }
                }
            }
        });
    });

    let projected = move || {
        let today = Local::now().date_naive();
        project_schedules(&schedules.get(), window.get(), today)
    };

    view! {
        <section class="panel schedule-panel">
            <div class="panel-header">
                <h2>"Schedule"</h2>
                <select
                    prop:value=move || window.get().as_value()
                    on:change=move |ev| {
                        set_window.set(ScheduleWindow::from_value(&event_target_value(&ev)));
                    }
                >
                    <option value="today">"Today"</option>
                    <option value="week">"This week"</option>
                    <option value="all">"All"</option>
                </select>
            </div>

            <For
                each=projected
                key=|entry| entry.id
                children=move |entry: ScheduleEntry| {
                    let is_emergency = entry.visit_type == "Emergency";
                    view! {
                        <div class="schedule-row" class:emergency=is_emergency>
                            <span class="visit-date">{entry.visit_date.clone()}</span>
                            <span class="visit-time">{entry.visit_time.clone()}</span>
                            <span class="visit-type">{entry.visit_type.clone()}</span>
                            <span class="visit-patient">{entry.patient_name.clone()}</span>
                            <span class="visit-member">{entry.member_name.clone()}</span>
                            {entry.notes.clone().map(|notes| view! {
                                <span class="visit-notes">{notes}</span>
                            })}
                        </div>
                    }
                }
            />

            {move || if projected().is_empty() {
                view! { <div class="empty-message">"No visits in this window"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </section>
    }
}
