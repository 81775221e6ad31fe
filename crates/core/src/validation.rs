//! Required-field validation.
//!
//! Ward only checks that required fields are present (and, for text, non-empty). Type
//! agreement is already enforced by deserialisation.

use crate::RecordError;

/// Collects the required fields missing from an incoming document.
///
/// Each check hands back the value when it is present, so callers can destructure the results
/// with `let ... else` once [`RequiredFields::finish`] has confirmed nothing is missing.
#[derive(Debug)]
pub struct RequiredFields {
    entity: &'static str,
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            missing: Vec::new(),
        }
    }

    /// Requires `value` to be present and non-empty.
    pub fn text(&mut self, path: &'static str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.missing.push(path);
                None
            }
        }
    }

    /// Requires `value` to be present.
    pub fn value<T>(&mut self, path: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(path);
        }
        value
    }

    pub fn finish(&self) -> Result<(), RecordError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(self.to_error())
        }
    }

    /// The validation error describing every missing field, in check order.
    pub fn to_error(&self) -> RecordError {
        let fields: Vec<String> = self
            .missing
            .iter()
            .map(|path| format!("{} is required", path))
            .collect();
        RecordError::InvalidInput(format!(
            "{} validation failed: {}",
            self.entity,
            fields.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present_passes() {
        let mut check = RequiredFields::new("Patient");
        let room = check.text("room", Some("101".into()));
        let age = check.value("age", Some(40.0));

        assert!(check.finish().is_ok());
        assert_eq!(room.as_deref(), Some("101"));
        assert_eq!(age, Some(40.0));
    }

    #[test]
    fn test_missing_and_empty_are_reported_in_order() {
        let mut check = RequiredFields::new("Patient");
        check.text("name.first", Some(String::new()));
        check.value::<f64>("age", None);
        check.text("room", Some("101".into()));

        match check.finish() {
            Err(RecordError::InvalidInput(msg)) => assert_eq!(
                msg,
                "Patient validation failed: name.first is required, age is required"
            ),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
