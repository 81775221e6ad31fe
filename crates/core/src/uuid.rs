//! Record identifiers and sharded-path utilities.
//!
//! Ward stores every document under a sharded directory derived from its identifier.
//!
//! To keep path derivation deterministic, Ward uses a *canonical* identifier representation:
//! **32 lowercase hexadecimal characters** (a v4 UUID in simple form, no hyphens).
//!
//! This module provides:
//! - [`RecordId`], a wrapper that *guarantees* the canonical format once constructed.
//! - The sharding logic used by the document store to place a document on disk.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! Identifiers arriving from outside the core (HTTP path segments, CLI arguments, request
//! bodies) must already be canonical. Uppercase, hyphenated, wrong-length or non-hex values are
//! rejected with [`RecordError::InvalidId`].
//!
//! ## Sharded directory layout
//! For a canonical id `u`, documents live under:
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! Example:
//! `patient_data/patients/55/0e/550e8400e29b41d4a716446655440000/`

use crate::error::{RecordError, RecordResult};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};
use ::uuid::Uuid;

/// Ward's canonical document identifier (32 lowercase hex characters, no hyphens).
///
/// Once you hold a `RecordId` you can assume it is canonical and safe to use for path
/// derivation.
///
/// # Construction
/// - [`RecordId::new`] allocates a fresh identifier for a new document.
/// - [`RecordId::parse`] validates an externally supplied identifier.
///
/// # Serialisation
/// Serialises as its canonical string. Deserialisation goes through [`RecordId::parse`], so a
/// request body carrying a malformed id fails to deserialise.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(Uuid);

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordId {
    /// Generates a new identifier in canonical form.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// This does **not** normalise hyphenated or uppercase forms.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidId`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> RecordResult<Self> {
        if !Self::is_canonical(input) {
            return Err(RecordError::InvalidId(format!(
                "id must be 32 lowercase hex characters without hyphens, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| RecordError::InvalidId(format!("'{}': {}", input, e)))
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `input` is in canonical form.
    ///
    /// Purely syntactic: exactly 32 bytes, each one of `0-9` or `a-f`.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns `parent_dir/<s1>/<s2>/<id>/` where `s1`/`s2` are the first two hex pairs.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let canonical = self.0.simple().to_string();
        let s1 = &canonical[0..2];
        let s2 = &canonical[2..4];
        parent_dir.join(s1).join(s2).join(&canonical)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_canonical_id() {
        let id = RecordId::new();
        let canonical = id.to_string();

        assert_eq!(canonical.len(), 32);
        assert!(RecordId::is_canonical(&canonical));
    }

    #[test]
    fn test_parse_valid_canonical_id() {
        let canonical = "550e8400e29b41d4a716446655440000";
        let id = RecordId::parse(canonical).expect("canonical id should parse");

        assert_eq!(id.to_string(), canonical);
    }

    #[test]
    fn test_parse_rejects_hyphenated_id() {
        let result = RecordId::parse("550e8400-e29b-41d4-a716-446655440000");

        match result {
            Err(RecordError::InvalidId(msg)) => {
                assert!(msg.contains("32 lowercase hex characters"));
            }
            other => panic!("expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_canonical_variants() {
        for input in [
            "550E8400E29B41D4A716446655440000",
            "550e8400e29b41d4a71644665544000",
            "550e8400e29b41d4a7164466554400000",
            "550e8400e29b41d4a716446655440zzz",
            "",
            "not-an-id",
        ] {
            assert!(RecordId::parse(input).is_err(), "'{}' should be rejected", input);
        }
    }

    #[test]
    fn test_sharded_dir_structure() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let sharded = id.sharded_dir(Path::new("/patient_data/patients"));

        assert_eq!(
            sharded,
            PathBuf::from("/patient_data/patients/55/0e/550e8400e29b41d4a716446655440000")
        );
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let id = RecordId::parse("00112233445566778899aabbccddeeff").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00112233445566778899aabbccddeeff\"");

        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let bad = serde_json::from_str::<RecordId>("\"00112233-4455\"");
        assert!(bad.is_err());
    }
}
