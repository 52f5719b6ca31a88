//! HTTP status classification.

use ghsearch_ghapi_interface::{types::GhApiErrorEnvelope, ApiError, Result};
use tracing::warn;

const UNAUTHORIZED: u16 = 401;

/// Is the status code a success (2xx)?
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Turn a non-2xx status and its body into an [`ApiError`].
///
/// Success codes pass through untouched. Otherwise the body is read as a
/// GitHub error envelope. When it cannot be read, 401 still maps to
/// `Unauthorized` with a fixed message and other codes to `HttpStatus`.
pub fn check_status(status: u16, body: &[u8]) -> Result<()> {
    if is_success(status) {
        return Ok(());
    }

    match serde_json::from_slice::<GhApiErrorEnvelope>(body) {
        Ok(envelope) if status == UNAUTHORIZED => Err(ApiError::Unauthorized {
            message: Some(envelope.message),
        }),
        Ok(envelope) => Err(ApiError::ApiStatus {
            code: status,
            message: envelope.message,
        }),
        Err(e) => {
            warn!(status = status, error = %e, "Could not decode API error body");

            if status == UNAUTHORIZED {
                Err(ApiError::unauthorized_fallback())
            } else {
                Err(ApiError::HttpStatus { code: status })
            }
        }
    }
}
