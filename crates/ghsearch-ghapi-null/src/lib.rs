//! Null transport for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use ghsearch_ghapi_interface::{Transport, TransportError, TransportResponse};
use url::Url;

const EMPTY_SEARCH_BODY: &str = r#"{"total_count":0,"incomplete_results":false,"items":[]}"#;

const README_BODY: &str = r#"{
  "name": "README.md",
  "path": "README.md",
  "sha": "0000000000000000000000000000000000000000",
  "size": 14,
  "url": "https://api.github.com/repos/null/null/contents/README.md",
  "html_url": "https://github.com/null/null/blob/main/README.md",
  "git_url": "https://api.github.com/repos/null/null/git/blobs/0000000000000000000000000000000000000000",
  "download_url": "https://raw.githubusercontent.com/null/null/main/README.md",
  "type": "file",
  "content": "IyBOdWxsIFJFQURNRQo=\n",
  "encoding": "base64",
  "_links": {
    "self": "https://api.github.com/repos/null/null/contents/README.md",
    "git": "https://api.github.com/repos/null/null/git/blobs/0000000000000000000000000000000000000000",
    "html": "https://github.com/null/null/blob/main/README.md"
  }
}"#;

// 1x1 transparent PNG.
const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// Null transport.
///
/// Answers every request offline with a canned payload.
#[derive(Clone, Default)]
pub struct NullTransport {
    _private: (),
}

impl NullTransport {
    /// Build a null transport.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl Transport for NullTransport {
    #[tracing::instrument(skip_all, fields(url = %url))]
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let path = url.path();
        let body: &[u8] = if path.ends_with("/search/repositories") {
            EMPTY_SEARCH_BODY.as_bytes()
        } else if path.ends_with("/readme") {
            README_BODY.as_bytes()
        } else {
            PIXEL_PNG
        };

        Ok(TransportResponse::new(200, body))
    }
}
