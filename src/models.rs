//! Frontend Models
//!
//! Data structures matching the remote API's records. Date and time fields
//! stay as strings here; the projection layer parses them, because a
//! malformed date from the server must degrade gracefully rather than fail
//! deserialization of the whole payload.

use serde::{Deserialize, Serialize};

/// Task priority as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Task completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The status a toggle request asks the server to move to.
    pub fn flipped(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

/// Task assigned to a volunteer/caregiver/medical professional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    /// Calendar date, "YYYY-MM-DD"
    pub due_date: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assignee: Option<String>,
}

/// A scheduled patient visit (read-only from this layer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: u32,
    pub patient_name: String,
    pub member_name: String,
    /// Calendar date, "YYYY-MM-DD"
    pub visit_date: String,
    /// Local time of day, "HH:MM"
    pub visit_time: String,
    /// Open set: "Routine", "Emergency", ...
    pub visit_type: String,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Classification of a notification's subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Volunteer,
    MedicalProfessional,
    Caregiver,
    Patient,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Volunteer,
        EntityType::MedicalProfessional,
        EntityType::Caregiver,
        EntityType::Patient,
    ];

    /// Wire name, as carried in entity_type payload fields.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Volunteer => "volunteer",
            EntityType::MedicalProfessional => "medical_professional",
            EntityType::Caregiver => "caregiver",
            EntityType::Patient => "patient",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityType::Volunteer => "Volunteers",
            EntityType::MedicalProfessional => "Medical professionals",
            EntityType::Caregiver => "Caregivers",
            EntityType::Patient => "Patients",
        }
    }
}

/// Dashboard role: admin, or one of the three VCM staff roles sharing the
/// VCM shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Volunteer,
    Caregiver,
    MedicalProfessional,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::Volunteer,
        Role::Caregiver,
        Role::MedicalProfessional,
    ];

    /// Path segment used in role-scoped endpoints.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Volunteer => "volunteer",
            Role::Caregiver => "caregiver",
            Role::MedicalProfessional => "medical_professional",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Volunteer => "Volunteer",
            Role::Caregiver => "Caregiver",
            Role::MedicalProfessional => "Medical staff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub entity_type: EntityType,
    pub is_read: bool,
    pub created_at: String,
}

/// Unread notification counts per entity type.
///
/// The total is always derived by summing; it is never stored separately, so
/// it cannot drift from the per-type counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCounts {
    #[serde(default)]
    pub volunteer: u32,
    #[serde(default)]
    pub medical_professional: u32,
    #[serde(default)]
    pub caregiver: u32,
    #[serde(default)]
    pub patient: u32,
}

impl NotificationCounts {
    pub fn get(&self, entity_type: EntityType) -> u32 {
        match entity_type {
            EntityType::Volunteer => self.volunteer,
            EntityType::MedicalProfessional => self.medical_professional,
            EntityType::Caregiver => self.caregiver,
            EntityType::Patient => self.patient,
        }
    }

    fn slot(&mut self, entity_type: EntityType) -> &mut u32 {
        match entity_type {
            EntityType::Volunteer => &mut self.volunteer,
            EntityType::MedicalProfessional => &mut self.medical_professional,
            EntityType::Caregiver => &mut self.caregiver,
            EntityType::Patient => &mut self.patient,
        }
    }

    /// Decrement one type's count, floored at zero.
    pub fn decrement(&mut self, entity_type: EntityType) {
        let slot = self.slot(entity_type);
        *slot = slot.saturating_sub(1);
    }

    /// Zero one type's count, returning the value it held.
    pub fn zero(&mut self, entity_type: EntityType) -> u32 {
        std::mem::take(self.slot(entity_type))
    }

    /// Total unread across all entity types.
    pub fn total(&self) -> u32 {
        self.volunteer + self.medical_professional + self.caregiver + self.patient
    }
}

/// Patient/helper pairing (read-only; selecting one loads the detail records)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u32,
    /// Absent on legacy rows; detail fetches guard on this before sending
    pub patient_id: Option<u32>,
    pub patient_name: String,
    pub helper_id: Option<u32>,
    /// "volunteer", "caregiver" or "medical_professional"
    pub helper_type: String,
    pub status: String,
    pub assigned_date: String,
}

/// Patient detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: Option<u32>,
    pub health_status: Option<String>,
    pub medical_history: Option<String>,
    pub notes: Option<String>,
    pub emergency_contact: Option<String>,
}

/// Helper (volunteer/caregiver/medical professional) detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Helper {
    pub id: u32,
    pub name: String,
    pub helper_type: String,
    pub phone: Option<String>,
    pub availability: Option<String>,
}

/// Headline numbers for the dashboard views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub patients: u32,
    #[serde(default)]
    pub volunteers: u32,
    #[serde(default)]
    pub caregivers: u32,
    #[serde(default)]
    pub medical_professionals: u32,
    #[serde(default)]
    pub pending_tasks: u32,
    #[serde(default)]
    pub upcoming_visits: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: u32,
    pub donor_name: String,
    pub amount: f64,
    pub donated_at: String,
}

/// Donation totals and emergency-fund balance for the admin widgets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundSummary {
    #[serde(default)]
    pub donations_total: f64,
    #[serde(default)]
    pub emergency_fund_balance: f64,
    #[serde(default)]
    pub recent_donations: Vec<Donation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flip_round_trips() {
        assert_eq!(TaskStatus::Pending.flipped().flipped(), TaskStatus::Pending);
        assert_eq!(TaskStatus::Completed.flipped(), TaskStatus::Pending);
    }
}
