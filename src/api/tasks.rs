//! Task Endpoints

use gloo_net::http::Request;
use serde::Serialize;

use super::{decode, get_json, send, ApiError};
use crate::config;
use crate::models::{Role, Task, TaskStatus};

#[derive(Serialize)]
struct StatusBody {
    status: TaskStatus,
}

pub async fn list_tasks(role: Role) -> Result<Vec<Task>, ApiError> {
    get_json(&format!("/api/tasks/{}", role.as_str())).await
}

/// Ask the server to move one task to `status`. Returns the
/// server-confirmed task, which replaces the local copy wholesale so an
/// out-of-band change on the server is never papered over by a blind flip.
pub async fn set_task_status(id: u32, status: TaskStatus) -> Result<Task, ApiError> {
    let request = Request::patch(&config::api_url(&format!("/api/tasks/{}/status", id)))
        .json(&StatusBody { status })?;
    decode(send(request).await?).await
}
