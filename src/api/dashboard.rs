//! Dashboard, Assignment and Team Endpoints

use super::{get_json, ApiError};
use crate::models::{Assignment, DashboardStats, FundSummary, Helper, Role};

pub async fn dashboard_stats(role: Role) -> Result<DashboardStats, ApiError> {
    get_json(&format!("/api/dashboard/{}", role.as_str())).await
}

pub async fn list_assignments(role: Role) -> Result<Vec<Assignment>, ApiError> {
    get_json(&format!("/api/assignments/{}", role.as_str())).await
}

pub async fn list_team(role: Role) -> Result<Vec<Helper>, ApiError> {
    get_json(&format!("/api/team/{}", role.as_str())).await
}

/// Donation totals and emergency-fund balance for the admin widgets.
pub async fn fund_summary() -> Result<FundSummary, ApiError> {
    get_json("/api/funds/summary").await
}
