//! Patient endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidPatient;
use crate::models::Patient;
use crate::state::AppState;

/// Confirmation returned by POST /patients
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /patients - store a new patient record
async fn create_patient(
    State(state): State<AppState>,
    ValidPatient(patient): ValidPatient,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let patient = state.store().insert(patient).await?;
    tracing::info!(id = patient.id, "patient added");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Patient added successfully",
        }),
    ))
}

/// GET /patients - list every stored patient
async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = state.store().list().await?;
    tracing::debug!(count = patients.len(), "listed patients");
    Ok(Json(patients))
}

/// Patient routes
pub fn router() -> Router<AppState> {
    Router::new().route("/patients", get(list_patients).post(create_patient))
}
