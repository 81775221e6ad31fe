//! # API REST
//!
//! REST API implementation for Ward.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation
//! - REST-specific concerns (status codes, JSON bodies, CORS)
//!
//! Data operations live in `ward-core`; handlers resolve the path entity and pass it on.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
pub mod health;
pub mod patients;

use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use ward_core::models::{BloodPressure, NewPatientName, PatientName, Reading};
use ward_core::{
    ClinicalTest, ClinicalTestService, ClinicalTestUpdate, DocumentStore, EntityResolver,
    NewClinicalTest, NewPatient, Patient, PatientService, PatientUpdate, TestSummary,
};

pub use error::ApiError;

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: EntityResolver,
    pub patients: PatientService,
    pub tests: ClinicalTestService,
}

impl AppState {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            resolver: EntityResolver::new(store.clone()),
            patients: PatientService::new(store.clone()),
            tests: ClinicalTestService::new(store),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        patients::list_patients,
        patients::create_patient,
        patients::get_patient,
        patients::update_patient,
        patients::delete_patient,
        clinical_tests::list_tests,
        clinical_tests::create_test,
        clinical_tests::get_test,
        clinical_tests::update_test,
        clinical_tests::delete_test,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::MessageRes,
        Patient,
        PatientName,
        NewPatient,
        NewPatientName,
        PatientUpdate,
        TestSummary,
        ClinicalTest,
        NewClinicalTest,
        ClinicalTestUpdate,
        Reading,
        BloodPressure,
    )),
    tags(
        (name = "patients", description = "Patient records"),
        (name = "tests", description = "Clinical tests recorded against a patient"),
    )
)]
pub struct ApiDoc;

/// Builds the full HTTP router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/patients",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route(
            "/api/patients/:id",
            get(patients::get_patient)
                .patch(patients::update_patient)
                .delete(patients::delete_patient),
        )
        .route(
            "/api/patients/:id/tests",
            get(clinical_tests::list_tests).post(clinical_tests::create_test),
        )
        .route(
            "/api/patients/:id/tests/:testid",
            get(clinical_tests::get_test)
                .patch(clinical_tests::update_test)
                .delete(clinical_tests::delete_test),
        )
        // Raw document only; no interactive docs UI is bundled.
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
