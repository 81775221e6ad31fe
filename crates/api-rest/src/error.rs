//! HTTP error mapping.
//!
//! Every failure leaves the API as a `{ "message": ... }` body with a status derived from the
//! underlying [`RecordError`].

use api_shared::MessageRes;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ward_core::constants::PATIENTS_COLLECTION;
use ward_core::RecordError;

#[derive(Debug)]
pub enum ApiError {
    Record(RecordError),
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Record(err) => match err {
                RecordError::PatientNotFound(_)
                | RecordError::TestNotFound(_)
                | RecordError::DocumentMissing { .. } => StatusCode::NOT_FOUND,
                RecordError::InvalidInput(_) | RecordError::DuplicateTest { .. } => {
                    StatusCode::BAD_REQUEST
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Record(err) => match err {
                RecordError::PatientNotFound(_) => "Cannot find patient".into(),
                RecordError::TestNotFound(_) => "Cannot find test".into(),
                RecordError::DocumentMissing { collection, .. } => {
                    if *collection == PATIENTS_COLLECTION {
                        "Cannot find patient".into()
                    } else {
                        "Cannot find test".into()
                    }
                }
                RecordError::DuplicateTest { .. } => "Test exists!".into(),
                other => other.to_string(),
            },
        }
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        ApiError::Record(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = %status, "request failed: {:?}", self);
        } else {
            tracing::warn!(status = %status, "request rejected: {}", message);
        }

        (status, Json(MessageRes::new(message))).into_response()
    }
}
