//! Constants used throughout the Ward core crate.
//!
//! Path, filename and default constants live here so the store, the services and the API
//! layers agree on them.

/// Default directory for document storage when no explicit directory is configured.
pub const DEFAULT_PATIENT_DATA_DIR: &str = "patient_data";

/// Default HTTP port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Default host the REST server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Collection (directory) name for patient documents.
pub const PATIENTS_COLLECTION: &str = "patients";

/// Collection (directory) name for clinical test documents.
pub const TESTS_COLLECTION: &str = "tests";

/// Filename of a stored document inside its sharded directory.
pub const DOCUMENT_FILENAME: &str = "document.json";
