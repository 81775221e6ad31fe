//! Entity resolution from path identifiers.
//!
//! Every single-entity operation starts by turning the identifier from the request path into a
//! loaded document. The resolved entity is handed to the next stage as a value.
//!
//! Outcomes:
//! - found: the entity,
//! - no such document: [`RecordError::PatientNotFound`] / [`RecordError::TestNotFound`],
//! - malformed identifier: [`RecordError::InvalidId`],
//! - storage failure: the underlying store error.

use crate::models::{ClinicalTest, Patient};
use crate::store::DocumentStore;
use crate::uuid::RecordId;
use crate::{RecordError, RecordResult};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct EntityResolver {
    store: Arc<DocumentStore>,
}

impl EntityResolver {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub fn patient(&self, id: &str) -> RecordResult<Patient> {
        let record_id = RecordId::parse(id)?;
        self.store
            .find_by_id::<Patient>(&record_id)?
            .ok_or_else(|| RecordError::PatientNotFound(id.to_string()))
    }

    pub fn test(&self, id: &str) -> RecordResult<ClinicalTest> {
        let record_id = RecordId::parse(id)?;
        self.store
            .find_by_id::<ClinicalTest>(&record_id)?
            .ok_or_else(|| RecordError::TestNotFound(id.to_string()))
    }
}
