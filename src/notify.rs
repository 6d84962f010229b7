//! Notification Aggregation
//!
//! Count bookkeeping for the notification panel. These functions mutate the
//! local list and counters optimistically after the server has accepted the
//! matching request; the 10-second counts poll remains authoritative and
//! simply overwrites whatever these left behind (remote wins).

use crate::models::{EntityType, Notification, NotificationCounts};

/// Mark one notification read and decrement its type's counter.
///
/// No-op on the counters if the notification is unknown or was already read.
pub fn mark_read(
    notifications: &mut [Notification],
    counts: &mut NotificationCounts,
    id: u32,
) {
    if let Some(n) = notifications.iter_mut().find(|n| n.id == id) {
        if !n.is_read {
            n.is_read = true;
            counts.decrement(n.entity_type);
        }
    }
}

/// Mark every notification of one entity type read and zero its counter.
///
/// The total drops by the counter's pre-call value (the counter may exceed
/// what is held locally; the local list is only the recent page).
pub fn mark_all_read_for_type(
    notifications: &mut [Notification],
    counts: &mut NotificationCounts,
    entity_type: EntityType,
) {
    for n in notifications.iter_mut().filter(|n| n.entity_type == entity_type) {
        n.is_read = true;
    }
    counts.zero(entity_type);
}

/// Remove one notification from the local list.
///
/// An unread notification also decrements its type's counter; a read one
/// leaves the counters untouched.
pub fn delete(
    notifications: &mut Vec<Notification>,
    counts: &mut NotificationCounts,
    id: u32,
) {
    if let Some(pos) = notifications.iter().position(|n| n.id == id) {
        let removed = notifications.remove(pos);
        if !removed.is_read {
            counts.decrement(removed.entity_type);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_notification(id: u32, entity_type: EntityType, is_read: bool) -> Notification {
        Notification {
            id,
            message: format!("Notification {}", id),
            entity_type,
            is_read,
            created_at: "2026-08-30T08:00:00Z".to_string(),
        }
    }

    fn counts(volunteer: u32, medical: u32, caregiver: u32, patient: u32) -> NotificationCounts {
        NotificationCounts {
            volunteer,
            medical_professional: medical,
            caregiver,
            patient,
        }
    }

    #[test]
    fn test_mark_read_decrements_type_and_total() {
        let mut list = vec![
            make_notification(1, EntityType::Volunteer, false),
            make_notification(2, EntityType::Patient, false),
        ];
        let mut c = counts(2, 0, 0, 1);

        mark_read(&mut list, &mut c, 1);

        assert!(list[0].is_read);
        assert_eq!(c.volunteer, 1);
        assert_eq!(c.total(), 2);
        // Unrelated counters untouched
        assert_eq!(c.patient, 1);
    }

    #[test]
    fn test_mark_read_is_noop_when_already_read() {
        let mut list = vec![make_notification(1, EntityType::Volunteer, true)];
        let mut c = counts(3, 0, 0, 0);

        mark_read(&mut list, &mut c, 1);
        assert_eq!(c.volunteer, 3);
        assert_eq!(c.total(), 3);

        mark_read(&mut list, &mut c, 99); // unknown id
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn test_mark_all_read_for_type_zeroes_by_precall_count() {
        // Counter says 5 unread patients even though only 2 are held locally.
        let mut list = vec![
            make_notification(1, EntityType::Patient, false),
            make_notification(2, EntityType::Patient, false),
            make_notification(3, EntityType::Caregiver, false),
        ];
        let mut c = counts(0, 0, 1, 5);
        let before_total = c.total();

        mark_all_read_for_type(&mut list, &mut c, EntityType::Patient);

        assert!(list[0].is_read && list[1].is_read);
        assert!(!list[2].is_read);
        assert_eq!(c.patient, 0);
        assert_eq!(c.total(), before_total - 5);
    }

    #[test]
    fn test_delete_unread_decrements_and_read_does_not() {
        let mut list = vec![
            make_notification(1, EntityType::Caregiver, false),
            make_notification(2, EntityType::Caregiver, true),
        ];
        let mut c = counts(0, 0, 1, 0);

        delete(&mut list, &mut c, 2);
        assert_eq!(list.len(), 1);
        assert_eq!(c.caregiver, 1);

        delete(&mut list, &mut c, 1);
        assert!(list.is_empty());
        assert_eq!(c.caregiver, 0);
        assert_eq!(c.total(), 0);
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut list = vec![make_notification(1, EntityType::Volunteer, false)];
        // Poll already reported zero; a late local decrement must not underflow.
        let mut c = counts(0, 0, 0, 0);
        mark_read(&mut list, &mut c, 1);
        assert_eq!(c.volunteer, 0);
        assert_eq!(c.total(), 0);
    }
}
