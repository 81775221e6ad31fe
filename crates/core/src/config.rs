//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Request handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_HOST, DEFAULT_PATIENT_DATA_DIR, DEFAULT_PORT};
use crate::{RecordError, RecordResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    patient_data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidInput`] if `patient_data_dir` is empty.
    pub fn new(patient_data_dir: PathBuf) -> RecordResult<Self> {
        if patient_data_dir.as_os_str().is_empty() {
            return Err(RecordError::InvalidInput(
                "patient data directory cannot be empty".into(),
            ));
        }

        Ok(Self { patient_data_dir })
    }

    pub fn patient_data_dir(&self) -> &Path {
        &self.patient_data_dir
    }
}

/// Resolve the data directory from an optional value, falling back to
/// [`DEFAULT_PATIENT_DATA_DIR`] when unset or blank.
pub fn patient_data_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATIENT_DATA_DIR))
}

/// Parse the listen port from an optional value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_PORT`].
///
/// # Errors
///
/// Returns [`RecordError::InvalidInput`] if the value is not a valid port number.
pub fn port_from_env_value(value: Option<String>) -> RecordResult<u16> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .parse::<u16>()
            .map_err(|e| RecordError::InvalidInput(format!("invalid PORT '{}': {}", v, e))),
    }
}

/// Build the `host:port` listen address.
pub fn listen_addr(host: Option<String>, port: u16) -> String {
    let host = host
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    format!("{}:{}", host, port)
}
