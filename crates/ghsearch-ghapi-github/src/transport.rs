//! Reqwest transport.

use async_trait::async_trait;
use ghsearch_config::Config;
use ghsearch_ghapi_interface::{Transport, TransportError, TransportResponse};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{auth::get_client_builder, errors::GitHubError};

/// HTTP transport backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport configured for the GitHub API.
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        Ok(Self {
            client: get_client_builder(config)?.build()?,
        })
    }

    /// Creates a transport from an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[tracing::instrument(skip_all, fields(url = %url))]
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(map_reqwest_error)?
            .to_vec();
        debug!(status = status, size = body.len(), "Received response");

        Ok(TransportResponse {
            status: Some(status),
            headers,
            body,
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Connect {
            message: e.to_string(),
        }
    } else {
        TransportError::Other {
            message: e.to_string(),
        }
    }
}
