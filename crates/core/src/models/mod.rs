//! Stored entities and the request payloads that build or change them.

pub mod patient;

pub use clinical_test::{
    BloodPressure, Category, ClinicalTest, ClinicalTestUpdate, NewClinicalTest, Reading,
    TestSummary,
};
pub use patient::{NewPatient, NewPatientName, Patient, PatientName, PatientUpdate};
