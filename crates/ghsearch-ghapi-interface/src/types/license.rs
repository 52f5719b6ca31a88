use serde::{Deserialize, Serialize};

/// GitHub repository license.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhLicense {
    /// Key.
    pub key: String,
    /// Name.
    pub name: String,
    /// URL.
    pub url: Option<String>,
    /// SPDX identifier.
    pub spdx_id: Option<String>,
    /// Global node ID.
    pub node_id: Option<String>,
}
