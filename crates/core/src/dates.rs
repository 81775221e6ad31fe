//! Date values stored on patients and tests.
//!
//! Clients may send either a full RFC 3339 timestamp or a plain `YYYY-MM-DD` date (read as
//! midnight UTC). Stored and returned values are always RFC 3339 UTC with millisecond precision,
//! e.g. `2024-01-01T00:00:00.000Z`.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordDate(DateTime<Utc>);

impl RecordDate {
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(Utc.from_utc_datetime(&midnight)));
            }
        }
        Err(format!(
            "invalid date '{}': expected RFC 3339 timestamp or YYYY-MM-DD",
            input
        ))
    }

    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl serde::Serialize for RecordDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for RecordDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordDate::parse(&s).map_err(serde::de::Error::custom)
    }
}
