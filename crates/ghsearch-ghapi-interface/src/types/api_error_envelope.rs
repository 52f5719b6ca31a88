use serde::{Deserialize, Serialize};

/// Error body returned by the GitHub API on non-2xx responses.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhApiErrorEnvelope {
    /// Message.
    pub message: String,
    /// Documentation URL.
    pub documentation_url: Option<String>,
    /// Detailed errors.
    pub errors: Option<Vec<GhApiErrorDetail>>,
    /// Status code, as a string.
    pub status: Option<String>,
}

/// Detailed error entry of a [`GhApiErrorEnvelope`].
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhApiErrorDetail {
    /// Resource.
    pub resource: Option<String>,
    /// Field.
    pub field: Option<String>,
    /// Code.
    pub code: Option<String>,
    /// Message.
    pub message: Option<String>,
}
