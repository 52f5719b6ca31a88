//! API errors.

use thiserror::Error;

/// Fallback message used when a 401 response body cannot be read.
pub(crate) const UNAUTHORIZED_FALLBACK_MESSAGE: &str = "Bad credentials";

/// Transport-level failure, raised before any response is obtained.
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("The network request timed out. Please try again.")]
    Timeout,

    #[error("Could not connect to the server. The GitHub API might be temporarily unavailable.")]
    Connect { message: String },

    #[error("The request was cancelled.")]
    Cancelled,

    #[error("A network error occurred: {message}")]
    Other { message: String },
}

/// API error.
///
/// Each variant renders the message shown to the user.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("The request URL was invalid. Please check the application's configuration.")]
    InvalidRequestUrl { url: String },

    #[error(transparent)]
    NetworkFailure { source: TransportError },

    #[error("Server responded with status code {code}. Please try again later.")]
    HttpStatus { code: u16 },

    #[error("{}", render_unauthorized(.message.as_deref()))]
    Unauthorized { message: Option<String> },

    #[error("GitHub API Error ({code}): {message}. Please try again.")]
    ApiStatus { code: u16, message: String },

    #[error("Failed to process data from the server. {source}")]
    DecodingFailure {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("The server returned an unexpected response format.")]
    EmptyOrInvalidResponse,

    #[error("An unexpected error occurred. Please try again.")]
    Unknown,
}

fn render_unauthorized(message: Option<&str>) -> String {
    match message {
        Some(msg) if !msg.is_empty() => format!(
            "Authentication failed: {msg}. Please check your Personal Access Token (PAT)."
        ),
        _ => "Authentication failed (401 Unauthorized). Please ensure your Personal Access Token (PAT) is correct and has the necessary permissions.".into(),
    }
}

impl ApiError {
    /// Build a decoding failure from any error.
    pub fn decoding<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecodingFailure {
            source: Box::new(error),
        }
    }

    /// Build an unauthorized error with the fixed fallback message.
    pub fn unauthorized_fallback() -> Self {
        Self::Unauthorized {
            message: Some(UNAUTHORIZED_FALLBACK_MESSAGE.into()),
        }
    }

    /// Build the error returned to a superseded or cancelled call.
    pub fn cancelled() -> Self {
        Self::NetworkFailure {
            source: TransportError::Cancelled,
        }
    }

    /// Was this error caused by a cancellation?
    ///
    /// Cancelled calls are not real failures and can be silently ignored.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::NetworkFailure {
                source: TransportError::Cancelled
            }
        )
    }

    /// HTTP status code attached to the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code } | Self::ApiStatus { code, .. } => Some(*code),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::NetworkFailure { source: e }
    }
}

/// Equality is tag-wise. Opaque decoding causes are compared by their
/// rendered message, which is an approximation of structural equality.
impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidRequestUrl { url: a }, Self::InvalidRequestUrl { url: b }) => a == b,
            (Self::NetworkFailure { source: a }, Self::NetworkFailure { source: b }) => a == b,
            (Self::HttpStatus { code: a }, Self::HttpStatus { code: b }) => a == b,
            (Self::Unauthorized { message: a }, Self::Unauthorized { message: b }) => a == b,
            (
                Self::ApiStatus {
                    code: code_a,
                    message: message_a,
                },
                Self::ApiStatus {
                    code: code_b,
                    message: message_b,
                },
            ) => code_a == code_b && message_a == message_b,
            (Self::DecodingFailure { source: a }, Self::DecodingFailure { source: b }) => {
                a.to_string() == b.to_string()
            }
            (Self::EmptyOrInvalidResponse, Self::EmptyOrInvalidResponse) => true,
            (Self::Unknown, Self::Unknown) => true,
            _ => false,
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
