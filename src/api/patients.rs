//! Patient and Helper Endpoints

use gloo_net::http::Request;
use serde::Serialize;

use super::{get_json, send_empty, ApiError};
use crate::config;
use crate::models::{Helper, Patient};

#[derive(Serialize)]
struct HealthStatusBody<'a> {
    health_status: &'a str,
}

#[derive(Serialize)]
struct MedicalHistoryBody<'a> {
    medical_history: &'a str,
}

#[derive(Serialize)]
struct NotesBody<'a> {
    notes: &'a str,
}

pub async fn get_patient(id: u32) -> Result<Patient, ApiError> {
    get_json(&format!("/api/patients/{}", id)).await
}

/// Fetch a helper detail record. The path pluralizes the helper type, e.g.
/// `/api/helpers/volunteers/7`.
pub async fn get_helper(helper_type: &str, id: u32) -> Result<Helper, ApiError> {
    get_json(&format!("/api/helpers/{}s/{}", helper_type, id)).await
}

pub async fn update_health_status(patient_id: u32, health_status: &str) -> Result<(), ApiError> {
    let request = Request::put(&config::api_url(&format!("/api/health-status/{}", patient_id)))
        .json(&HealthStatusBody { health_status })?;
    send_empty(request).await
}

pub async fn update_medical_history(patient_id: u32, medical_history: &str) -> Result<(), ApiError> {
    let request = Request::put(&config::api_url(&format!("/api/medical-history/{}", patient_id)))
        .json(&MedicalHistoryBody { medical_history })?;
    send_empty(request).await
}

pub async fn update_patient_notes(id: u32, notes: &str) -> Result<(), ApiError> {
    let request = Request::put(&config::api_url(&format!("/api/patients/{}/notes", id)))
        .json(&NotesBody { notes })?;
    send_empty(request).await
}
