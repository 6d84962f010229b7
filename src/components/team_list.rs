//! Team List Component
//!
//! Fellow helpers for the active role's team view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{is_mounted, mount_flag, AppContext};
use crate::models::Helper;

#[component]
pub fn TeamList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let alive = mount_flag();

    let (team, set_team) = signal(Vec::<Helper>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let role = ctx.current_role.get();
        spawn_local(async move {
            match api::list_team(role).await {
                Ok(loaded) => {
                    if is_mounted(alive) {
                        set_team.set(loaded);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to load team: {}", err));
                    }
                }
            }
        });
    });

    view! {
        <section class="panel team-panel">
            <div class="panel-header">
                <h2>"Team"</h2>
            </div>

            <For
                each=move || team.get()
                key=|member| member.id
                children=|member: Helper| {
                    view! {
                        <div class="team-row">
                            <span class="team-name">{member.name.clone()}</span>
                            <span class="team-type">{member.helper_type.clone()}</span>
                            {member.phone.clone().map(|p| view! { <span class="team-phone">{p}</span> })}
                            {member.availability.clone().map(|a| view! { <span class="team-availability">{a}</span> })}
                        </div>
                    }
                }
            />

            {move || if team.get().is_empty() {
                view! { <div class="empty-message">"No team members"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </section>
    }
}
