//! Request body decoding for partial updates.

use crate::ApiError;
use axum::body::Bytes;
use axum::Json;
use serde::de::DeserializeOwned;

/// Decodes a partial-update body. An empty body is the empty update.
pub fn update_body<T>(bytes: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let Json(value) = Json::<T>::from_bytes(bytes)?;
    Ok(value)
}
