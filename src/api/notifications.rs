//! Notification Endpoints

use gloo_net::http::Request;
use serde::Serialize;

use super::{get_json, send_empty, ApiError};
use crate::config;
use crate::models::{EntityType, Notification, NotificationCounts};

#[derive(Serialize)]
struct MarkAllBody {
    entity_type: EntityType,
}

/// Authoritative unread counts; the poll replaces local counts with these.
pub async fn notification_counts() -> Result<NotificationCounts, ApiError> {
    get_json("/api/notifications/counts").await
}

pub async fn recent_notifications() -> Result<Vec<Notification>, ApiError> {
    get_json("/api/notifications/recent").await
}

pub async fn mark_notification_read(id: u32) -> Result<(), ApiError> {
    let request =
        Request::post(&config::api_url(&format!("/api/notifications/{}/mark-read", id))).build()?;
    send_empty(request).await
}

pub async fn mark_all_read_for_type(entity_type: EntityType) -> Result<(), ApiError> {
    let request = Request::post(&config::api_url("/api/notifications/mark-read"))
        .json(&MarkAllBody { entity_type })?;
    send_empty(request).await
}

pub async fn delete_notification(id: u32) -> Result<(), ApiError> {
    let request =
        Request::delete(&config::api_url(&format!("/api/notifications/{}", id))).build()?;
    send_empty(request).await
}
