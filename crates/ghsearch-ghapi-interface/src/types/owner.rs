use serde::{Deserialize, Serialize};

/// GitHub repository owner.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOwner {
    /// Username.
    pub login: String,
    /// ID.
    pub id: u64,
    /// Global node ID.
    pub node_id: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Profile URL.
    pub html_url: String,
    /// Account type (`User`, `Organization`, ...).
    #[serde(rename = "type")]
    pub account_type: String,
}
