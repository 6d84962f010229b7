//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the state
//! that outlives any single panel: notification counts and the recent list
//! (shared by the badge and the panel), plus the dashboard and fund numbers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DashboardStats, FundSummary, Notification, NotificationCounts};
use crate::notify;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Unread counts per entity type, authoritative from the counts poll
    pub counts: NotificationCounts,
    /// Recent notifications page
    pub notifications: Vec<Notification>,
    /// Headline numbers for the active role's dashboard
    pub dashboard: DashboardStats,
    /// Donation and emergency-fund numbers (admin widgets)
    pub fund: FundSummary,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace counts wholesale with the server's numbers. The poll calls this
/// every tick; any optimistic decrement since the last tick is overwritten
/// (remote wins).
pub fn store_replace_counts(store: &AppStore, counts: NotificationCounts) {
    *store.counts().write() = counts;
}

pub fn store_set_notifications(store: &AppStore, notifications: Vec<Notification>) {
    *store.notifications().write() = notifications;
}

// The store serializes subfield access through one root lock, so these
// helpers never hold two write guards at once: counts are copied out,
// adjusted alongside the list mutation, and written back after the list
// guard has dropped.

/// Optimistically mark one notification read and decrement its counter.
pub fn store_mark_read(store: &AppStore, id: u32) {
    let mut counts = store.counts().get_untracked();
    {
        let field = store.notifications();
        let mut list = field.write();
        notify::mark_read(list.as_mut_slice(), &mut counts, id);
    }
    store.counts().set(counts);
}

/// Optimistically mark a whole entity type read and zero its counter.
pub fn store_mark_all_read_for_type(store: &AppStore, entity_type: crate::models::EntityType) {
    let mut counts = store.counts().get_untracked();
    {
        let field = store.notifications();
        let mut list = field.write();
        notify::mark_all_read_for_type(list.as_mut_slice(), &mut counts, entity_type);
    }
    store.counts().set(counts);
}

/// Optimistically drop one notification, adjusting counters if it was unread.
pub fn store_delete_notification(store: &AppStore, id: u32) {
    let mut counts = store.counts().get_untracked();
    {
        let field = store.notifications();
        let mut list = field.write();
        notify::delete(&mut list, &mut counts, id);
    }
    store.counts().set(counts);
}

pub fn store_set_dashboard(store: &AppStore, stats: DashboardStats) {
    *store.dashboard().write() = stats;
}

pub fn store_set_fund(store: &AppStore, fund: FundSummary) {
    *store.fund().write() = fund;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityType;

    fn make_notification(id: u32, entity_type: EntityType, is_read: bool) -> Notification {
        Notification {
            id,
            message: format!("Notification {}", id),
            entity_type,
            is_read,
            created_at: "2026-08-30T08:00:00Z".to_string(),
        }
    }

    fn seeded_store() -> AppStore {
        Store::new(AppState {
            counts: NotificationCounts {
                volunteer: 2,
                patient: 1,
                ..Default::default()
            },
            notifications: vec![
                make_notification(1, EntityType::Volunteer, false),
                make_notification(2, EntityType::Volunteer, false),
                make_notification(3, EntityType::Patient, false),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn test_store_mark_read_updates_list_and_counts() {
        let store = seeded_store();
        store_mark_read(&store, 1);
        assert!(store.notifications().get_untracked()[0].is_read);
        assert_eq!(store.counts().get_untracked().volunteer, 1);
        assert_eq!(store.counts().get_untracked().total(), 2);
    }

    #[test]
    fn test_store_mark_all_read_for_type_zeroes_counter() {
        let store = seeded_store();
        store_mark_all_read_for_type(&store, EntityType::Volunteer);
        let list = store.notifications().get_untracked();
        assert!(list[0].is_read && list[1].is_read);
        assert!(!list[2].is_read);
        assert_eq!(store.counts().get_untracked().volunteer, 0);
        assert_eq!(store.counts().get_untracked().total(), 1);
    }

    #[test]
    fn test_store_delete_unread_adjusts_counts() {
        let store = seeded_store();
        store_delete_notification(&store, 3);
        assert_eq!(store.notifications().get_untracked().len(), 2);
        assert_eq!(store.counts().get_untracked().patient, 0);
        assert_eq!(store.counts().get_untracked().total(), 2);
    }

    #[test]
    fn test_store_replace_counts_overwrites_local_decrements() {
        let store = seeded_store();
        store_mark_read(&store, 1);
        // Next poll tick wins over the optimistic decrement
        let polled = NotificationCounts {
            volunteer: 5,
            ..Default::default()
        };
        store_replace_counts(&store, polled);
        assert_eq!(store.counts().get_untracked(), polled);
    }
}
