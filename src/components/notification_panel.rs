//! Notification Panel Component
//!
//! Unread counts per entity type plus the recent notifications list, backed
//! by the global store so the header badge and this panel never disagree.
//! Mutations update the store optimistically after the server accepts the
//! request; the counts poll remains authoritative and may overwrite them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{is_mounted, mount_flag, AppContext};
use crate::models::{EntityType, Notification};
use crate::store::{
    store_delete_notification, store_mark_all_read_for_type, store_mark_read,
    store_set_notifications, use_app_store, AppStateStoreFields,
};

#[component]
pub fn NotificationPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let alive = mount_flag();

    // Load the recent page on mount and on reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::recent_notifications().await {
                Ok(loaded) => {
                    if is_mounted(alive) {
                        store_set_notifications(&store, loaded);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to load notifications: {}", err));
                    }
                }
            }
        });
    });

    let on_mark_read = move |id: u32| {
        spawn_local(async move {
            match api::mark_notification_read(id).await {
                Ok(()) => {
                    if is_mounted(alive) {
                        store_mark_read(&store, id);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to mark notification read: {}", err));
                    }
                }
            }
        });
    };

    let on_mark_all = move |entity_type: EntityType| {
        spawn_local(async move {
            match api::mark_all_read_for_type(entity_type).await {
                Ok(()) => {
                    if is_mounted(alive) {
                        store_mark_all_read_for_type(&store, entity_type);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to mark notifications read: {}", err));
                    }
                }
            }
        });
    };

    let on_delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_notification(id).await {
                Ok(()) => {
                    if is_mounted(alive) {
                        store_delete_notification(&store, id);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to delete notification: {}", err));
                    }
                }
            }
        });
    };

    view! {
        <section class="panel notification-panel">
            <div class="panel-header">
                <h2>"Notifications"</h2>
                <span class="unread-total">
                    {move || format!("{} unread", store.counts().get().total())}
                </span>
            </div>

            // Per-type counters with bulk mark-read
            <div class="notification-counts">
                {EntityType::ALL
                    .into_iter()
                    .map(|entity_type| {
                        let count = move || store.counts().get().get(entity_type);
                        view! {
                            <div class="count-row">
                                <span class="count-label">{entity_type.label()}</span>
                                <span class="count-value">{count}</span>
                                <button
                                    class="mark-all-btn"
                                    disabled=move || count() == 0
                                    on:click=move |_| on_mark_all(entity_type)
                                >
                                    "Mark all read"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <For
                each=move || store.notifications().get()
                key=|n| (n.id, n.is_read)
                children=move |notification: Notification| {
                    let id = notification.id;
                    let is_read = notification.is_read;
                    view! {
                        <div class="notification-row" class:read=is_read>
                            <span class="notification-type">{notification.entity_type.as_str()}</span>
                            <span class="notification-message">{notification.message.clone()}</span>
                            <span class="notification-time">{notification.created_at.clone()}</span>
                            {(!is_read).then(|| view! {
                                <button class="mark-read-btn" on:click=move |_| on_mark_read(id)>
                                    "Mark read"
                                </button>
                            })}
                            <button class="delete-btn" on:click=move |_| on_delete(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />

            {move || if store.notifications().with(|list| list.is_empty()) {
                view! { <div class="empty-message">"No recent notifications"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </section>
    }
}
