/// GitHub transport setup error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    /// The HTTP client could not be built.
    #[error(transparent)]
    HttpError {
        /// Source.
        source: reqwest::Error,
    },

    /// The configured token is not a valid header value.
    #[error("Invalid GitHub token,\n  caused by: {}", source)]
    InvalidTokenError {
        /// Source.
        source: http::header::InvalidHeaderValue,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}
