//! Role Tab Bar Component
//!
//! Switches between the admin dashboard and the three VCM staff roles, which
//! share one dashboard shell.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Role;

#[component]
pub fn RoleTabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="role-tab-bar">
            {Role::ALL
                .into_iter()
                .map(|role| {
                    let is_active = move || ctx.current_role.get() == role;
                    let tab_class = move || {
                        if is_active() { "role-tab active" } else { "role-tab" }
                    };
                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| ctx.set_current_role.set(role)
                        >
                            {role.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
