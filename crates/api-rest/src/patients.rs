//! Patient endpoints under `/api/patients`.

use crate::extract::update_body;
use crate::{ApiError, AppState};
use api_shared::MessageRes;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ward_core::{NewPatient, Patient, PatientUpdate};

#[utoipa::path(
    get,
    path = "/api/patients",
    tag = "patients",
    responses(
        (status = 200, description = "Every stored patient", body = [Patient]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(state.patients.list()?))
}

#[utoipa::path(
    post,
    path = "/api/patients",
    tag = "patients",
    request_body = NewPatient,
    responses(
        (status = 201, description = "Patient created", body = Patient),
        (status = 400, description = "Validation failed", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Create a patient.
///
/// Every field except `tests` and `picture` is required. Returns the stored document with its
/// generated `_id`.
#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<AppState>,
    body: Result<Json<NewPatient>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let Json(new) = body?;
    let patient = state.patients.create(new)?;
    Ok((StatusCode::CREATED, Json(patient)))
}

#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    tag = "patients",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "The patient", body = Patient),
        (status = 404, description = "Cannot find patient", body = MessageRes),
        (status = 500, description = "Malformed id or storage failure", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(state.resolver.patient(&id)?))
}

#[utoipa::path(
    patch,
    path = "/api/patients/{id}",
    tag = "patients",
    params(("id" = String, Path, description = "Patient id")),
    request_body = PatientUpdate,
    responses(
        (status = 200, description = "Updated patient", body = Patient),
        (status = 400, description = "Invalid payload", body = MessageRes),
        (status = 404, description = "Cannot find patient", body = MessageRes),
        (status = 500, description = "Malformed id or storage failure", body = MessageRes)
    )
)]
/// Partially update a patient.
///
/// Only `condition`, `room`, `date`, `weight`, `picture`, `gender` and `tests` are applied, and
/// only when present and non-null. An empty body changes nothing.
#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Patient>, ApiError> {
    let patient = state.resolver.patient(&id)?;
    let changes: PatientUpdate = update_body(&body)?;
    Ok(Json(state.patients.update(&patient, changes)?))
}

#[utoipa::path(
    delete,
    path = "/api/patients/{id}",
    tag = "patients",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Patient deleted", body = MessageRes),
        (status = 404, description = "Cannot find patient", body = MessageRes),
        (status = 500, description = "Malformed id or storage failure", body = MessageRes)
    )
)]
/// Delete a patient. The patient's test documents are not removed.
#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageRes>, ApiError> {
    let patient = state.resolver.patient(&id)?;
    state.patients.delete(&patient)?;
    Ok(Json(MessageRes::new("Patient Deleted!")))
}
