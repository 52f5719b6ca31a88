use async_trait::async_trait;
use http::HeaderMap;
use url::Url;

use crate::TransportError;

/// Raw response returned by a transport.
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    /// HTTP status code, if the response carried one.
    pub status: Option<u16>,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Build a response with a status and a body.
    pub fn new<B: Into<Vec<u8>>>(status: u16, body: B) -> Self {
        Self {
            status: Some(status),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Transport boundary for all HTTP I/O.
///
/// Dropping the returned future cancels the call.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}
