//! JSON response decoding.

use ghsearch_ghapi_interface::{ApiError, Result};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Decode a JSON body into a typed value.
///
/// Wire keys are snake_case and dates are `YYYY-MM-DDTHH:MM:SSZ`. A missing required field
/// fails the whole decode.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(
            category = ?e.classify(),
            line = e.line(),
            column = e.column(),
            target_type = std::any::type_name::<T>(),
            "Could not decode response body: {}",
            e
        );

        ApiError::decoding(e)
    })
}
