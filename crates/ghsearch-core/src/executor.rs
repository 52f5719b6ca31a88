//! Request execution.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use ghsearch_ghapi_interface::{ApiError, Result, Transport};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::{decoder::decode_json, status::check_status};

/// Performs network calls and normalizes their outcome.
///
/// Every failure leaving the executor is an [`ApiError`]. No retry is
/// attempted.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    debug_mode: Arc<AtomicBool>,
}

impl RequestExecutor {
    /// Creates a new executor on top of a transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            debug_mode: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Toggle raw body logging.
    pub fn set_debug_mode(&self, enabled: bool) {
        self.debug_mode.store(enabled, Ordering::Relaxed);
    }

    /// Is raw body logging enabled?
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode.load(Ordering::Relaxed)
    }

    /// Fetch and decode a JSON resource.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let (status, body) = self.send(url).await?;
        self.trace_body(url, &body);
        check_status(status, &body)?;
        decode_json(&body)
    }

    /// Fetch a raw resource, returning its body on success.
    pub async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let (status, body) = self.send(url).await?;
        check_status(status, &body)?;
        Ok(body)
    }

    async fn send(&self, url: &Url) -> Result<(u16, Vec<u8>)> {
        debug!(url = %url, "Sending request");

        let response = self.transport.get(url).await.map_err(ApiError::from)?;
        if response.body.is_empty() {
            debug!(url = %url, status = ?response.status, "Received empty body");
            return Err(ApiError::EmptyOrInvalidResponse);
        }

        let status = response.status.ok_or(ApiError::EmptyOrInvalidResponse)?;
        debug!(url = %url, status = status, size = response.body.len(), "Received response");

        Ok((status, response.body))
    }

    fn trace_body(&self, url: &Url, body: &[u8]) {
        if self.is_debug_mode() {
            info!(
                url = %url,
                body = %String::from_utf8_lossy(body),
                "Raw response body"
            );
        }
    }
}
