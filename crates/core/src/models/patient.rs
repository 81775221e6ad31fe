//! Patient documents and the payloads that create and change them.

use crate::constants::PATIENTS_COLLECTION;
use crate::dates::RecordDate;
use crate::models::clinical_test::TestSummary;
use crate::store::Document;
use crate::uuid::RecordId;
use crate::validation::RequiredFields;
use crate::RecordResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: RecordId,
    pub name: PatientName,
    pub age: f64,
    pub gender: String,
    pub room: String,
    pub condition: String,
    pub weight: String,
    pub height: String,
    #[schema(value_type = String)]
    pub date: RecordDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default)]
    pub tests: Vec<TestSummary>,
}

impl Document for Patient {
    const COLLECTION: &'static str = PATIENTS_COLLECTION;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Patient {
    /// Checks required text fields after an in-place change.
    pub fn validate(&self) -> RecordResult<()> {
        let mut check = RequiredFields::new("Patient");
        check.text("name.first", Some(self.name.first.clone()));
        check.text("name.last", Some(self.name.last.clone()));
        check.text("gender", Some(self.gender.clone()));
        check.text("room", Some(self.room.clone()));
        check.text("condition", Some(self.condition.clone()));
        check.text("weight", Some(self.weight.clone()));
        check.text("height", Some(self.height.clone()));
        check.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewPatientName {
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Payload for creating a patient.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewPatient {
    pub name: Option<NewPatientName>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub room: Option<String>,
    pub condition: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    #[schema(value_type = Option<String>)]
    pub date: Option<RecordDate>,
    pub tests: Option<Vec<TestSummary>>,
    pub picture: Option<String>,
}

impl NewPatient {
    /// Builds a patient under a freshly allocated id.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidInput` listing every missing or empty required field.
    pub fn into_patient(self) -> RecordResult<Patient> {
        let name = self.name.unwrap_or_default();

        let mut check = RequiredFields::new("Patient");
        let first = check.text("name.first", name.first);
        let last = check.text("name.last", name.last);
        let age = check.value("age", self.age);
        let gender = check.text("gender", self.gender);
        let room = check.text("room", self.room);
        let condition = check.text("condition", self.condition);
        let weight = check.text("weight", self.weight);
        let height = check.text("height", self.height);
        let date = check.value("date", self.date);

        let (
            Some(first),
            Some(last),
            Some(age),
            Some(gender),
            Some(room),
            Some(condition),
            Some(weight),
            Some(height),
            Some(date),
        ) = (first, last, age, gender, room, condition, weight, height, date)
        else {
            return Err(check.to_error());
        };

        Ok(Patient {
            id: RecordId::new(),
            name: PatientName { first, last },
            age,
            gender,
            room,
            condition,
            weight,
            height,
            date,
            picture: self.picture,
            tests: self.tests.unwrap_or_default(),
        })
    }
}

/// Payload for a partial patient update.
///
/// Only these fields can change through an update; `name`, `age` and `height` are fixed at
/// creation. Absent and `null` fields leave the patient unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PatientUpdate {
    pub condition: Option<String>,
    pub room: Option<String>,
    #[schema(value_type = Option<String>)]
    pub date: Option<RecordDate>,
    pub weight: Option<String>,
    pub picture: Option<String>,
    pub gender: Option<String>,
    pub tests: Option<Vec<TestSummary>>,
}

impl PatientUpdate {
    /// Applies the update to `patient` and re-checks required fields.
    pub fn apply_to(self, patient: &mut Patient) -> RecordResult<()> {
        if let Some(condition) = self.condition {
            patient.condition = condition;
        }
        if let Some(room) = self.room {
            patient.room = room;
        }
        if let Some(date) = self.date {
            patient.date = date;
        }
        if let Some(weight) = self.weight {
            patient.weight = weight;
        }
        if let Some(picture) = self.picture {
            patient.picture = Some(picture);
        }
        if let Some(gender) = self.gender {
            patient.gender = gender;
        }
        if let Some(tests) = self.tests {
            patient.tests = tests;
        }

        patient.validate()
    }
}
