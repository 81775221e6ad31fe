//! Patient record operations.
//!
//! Pure data operations over the document store; no HTTP concerns. Callers resolve the patient
//! first (see [`crate::resolver::EntityResolver`]) and pass it in. Writes re-read the document
//! under the store's write lock so a concurrent test append is never overwritten by a stale copy.

use crate::models::{NewPatient, Patient, PatientUpdate};
use crate::store::DocumentStore;
use crate::{RecordError, RecordResult};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct PatientService {
    store: Arc<DocumentStore>,
}

impl PatientService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Every stored patient, ordered by id.
    pub fn list(&self) -> RecordResult<Vec<Patient>> {
        self.store.find_all::<Patient>()
    }

    /// Validates and stores a new patient.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if:
    /// - a required field is missing or empty ([`RecordError::InvalidInput`]),
    /// - the document cannot be written.
    pub fn create(&self, new: NewPatient) -> RecordResult<Patient> {
        let patient = new.into_patient()?;
        self.store.insert(&patient)?;

        tracing::info!(patient_id = %patient.id, "patient created");
        Ok(patient)
    }

    /// Applies a partial update to a resolved patient and persists it.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if:
    /// - the patient was deleted after resolution ([`RecordError::PatientNotFound`]),
    /// - the result fails validation ([`RecordError::InvalidInput`]),
    /// - the document cannot be written.
    pub fn update(&self, patient: &Patient, changes: PatientUpdate) -> RecordResult<Patient> {
        let _guard = self.store.exclusive()?;

        let mut current = self
            .store
            .find_by_id::<Patient>(&patient.id)?
            .ok_or_else(|| RecordError::PatientNotFound(patient.id.to_string()))?;

        changes.apply_to(&mut current)?;
        self.store.save(&current)?;

        tracing::info!(patient_id = %current.id, "patient updated");
        Ok(current)
    }

    /// Deletes a resolved patient. The patient's test documents are left in place.
    pub fn delete(&self, patient: &Patient) -> RecordResult<()> {
        let _guard = self.store.exclusive()?;

        if !self.store.delete::<Patient>(&patient.id)? {
            return Err(RecordError::PatientNotFound(patient.id.to_string()));
        }

        tracing::info!(patient_id = %patient.id, "patient deleted");
        Ok(())
    }
}
