//! Auth.

use std::time::Duration;

use ghsearch_config::Config;
use http::{header, HeaderMap, HeaderValue};
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Get a GitHub client builder.
///
/// Requests are anonymous unless a token is configured.
pub fn get_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(
        GITHUB_API_VERSION_HEADER,
        HeaderValue::from_static(GITHUB_API_VERSION),
    );

    let token = &config.api.github.token;
    if !token.is_empty() {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| GitHubError::InvalidTokenError { source: e })?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("ghsearch/{}", config.version))
        .default_headers(headers))
}
