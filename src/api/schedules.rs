//! Schedule Endpoints

use super::{get_json, ApiError};
use crate::models::{Role, ScheduleEntry};

pub async fn list_schedules(role: Role) -> Result<Vec<ScheduleEntry>, ApiError> {
    get_json(&format!("/api/schedules/{}", role.as_str())).await
}
