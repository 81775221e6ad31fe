#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("patient {0} not found")]
    PatientNotFound(String),
    #[error("test {0} not found")]
    TestNotFound(String),
    #[error("test already exists for patient {patient_id}")]
    DuplicateTest { patient_id: String },
    #[error("document {collection}/{id} already exists")]
    DocumentExists { collection: &'static str, id: String },
    #[error("document {collection}/{id} no longer exists")]
    DocumentMissing { collection: &'static str, id: String },

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write document file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read document file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove document: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize document: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize document: {0}")]
    Deserialization(serde_json::Error),
    #[error("document store write lock poisoned")]
    LockPoisoned,
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;
