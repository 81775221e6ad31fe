//! # Ward Core
//!
//! Core business logic for the ward patient and test record system.
//!
//! This crate contains pure data operations over a file-backed document store:
//! - Patient creation, listing, partial update and deletion
//! - Clinical test recording with per-patient duplicate detection
//! - Entity resolution from path identifiers
//! - Sharded JSON storage under the configured patient data directory
//!
//! **No API concerns**: HTTP routing, status codes and response bodies belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod models;
pub mod repositories;
pub mod resolver;
pub mod store;
pub mod uuid;
pub mod validation;

pub use config::CoreConfig;
pub use dates::RecordDate;
pub use error::{RecordError, RecordResult};
pub use models::{
    ClinicalTest, ClinicalTestUpdate, NewClinicalTest, NewPatient, Patient, PatientUpdate,
    TestSummary,
};
pub use repositories::clinical_tests::ClinicalTestService;
pub use repositories::patients::PatientService;
pub use resolver::EntityResolver;
pub use store::{Document, DocumentStore};
pub use crate::uuid::RecordId;
