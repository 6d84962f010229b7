//! Dashboard Panel Component
//!
//! Headline numbers for the active role, plus the donation/emergency-fund
//! widgets when the admin dashboard is shown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{is_mounted, mount_flag, AppContext};
use crate::models::{Donation, Role};
use crate::store::{store_set_dashboard, store_set_fund, use_app_store, AppStateStoreFields};

#[component]
fn StatCard(label: &'static str, value: Signal<u32>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

/// Donation totals and emergency-fund balance
#[component]
fn FundWidget() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="fund-widgets">
            <div class="fund-card">
                <span class="fund-value">
                    {move || format!("${:.2}", store.fund().get().donations_total)}
                </span>
                <span class="fund-label">"Donations received"</span>
            </div>
            <div class="fund-card">
                <span class="fund-value">
                    {move || format!("${:.2}", store.fund().get().emergency_fund_balance)}
                </span>
                <span class="fund-label">"Emergency fund"</span>
            </div>
            <div class="recent-donations">
                <h3>"Recent donations"</h3>
                <For
                    each=move || store.fund().get().recent_donations
                    key=|d| d.id
                    children=|donation: Donation| {
                        view! {
                            <div class="donation-row">
                                <span>{donation.donor_name.clone()}</span>
                                <span>{format!("${:.2}", donation.amount)}</span>
                                <span>{donation.donated_at.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let alive = mount_flag();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let role = ctx.current_role.get();
        spawn_local(async move {
            match api::dashboard_stats(role).await {
                Ok(stats) => {
                    if is_mounted(alive) {
                        store_set_dashboard(&store, stats);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to load dashboard: {}", err));
                    }
                }
            }
            if role == Role::Admin {
                match api::fund_summary().await {
                    Ok(fund) => {
                        if is_mounted(alive) {
                            store_set_fund(&store, fund);
                        }
                    }
                    Err(err) => {
                        if is_mounted(alive) {
                            ctx.flash_error(format!("Failed to load fund summary: {}", err));
                        }
                    }
                }
            }
        });
    });

    let stats = move || store.dashboard().get();

    view! {
        <section class="panel dashboard-panel">
            <div class="panel-header">
                <h2>{move || format!("{} dashboard", ctx.current_role.get().label())}</h2>
            </div>

            <div class="stat-grid">
                <StatCard label="Patients" value=Signal::derive(move || stats().patients) />
                <StatCard label="Volunteers" value=Signal::derive(move || stats().volunteers) />
                <StatCard label="Caregivers" value=Signal::derive(move || stats().caregivers) />
                <StatCard label="Medical staff" value=Signal::derive(move || stats().medical_professionals) />
                <StatCard label="Pending tasks" value=Signal::derive(move || stats().pending_tasks) />
                <StatCard label="Upcoming visits" value=Signal::derive(move || stats().upcoming_visits) />
            </div>

            {move || (ctx.current_role.get() == Role::Admin).then(|| view! { <FundWidget /> })}
        </section>
    }
}
