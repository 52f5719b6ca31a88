use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{GhLicense, GhOwner};

/// GitHub repository, as returned by the search API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GhRepository {
    /// ID.
    pub id: u64,
    /// Global node ID.
    pub node_id: String,
    /// Name.
    pub name: String,
    /// Full name (`owner/name`).
    pub full_name: String,
    /// Private?
    #[serde(rename = "private")]
    pub is_private: bool,
    /// Owner.
    pub owner: Option<GhOwner>,
    /// HTML URL.
    pub html_url: String,
    /// Description.
    pub description: Option<String>,
    /// Fork?
    pub fork: bool,
    /// API URL.
    pub url: String,
    /// Created at.
    #[serde(with = "super::github_date")]
    pub created_at: OffsetDateTime,
    /// Updated at.
    #[serde(with = "super::github_date")]
    pub updated_at: OffsetDateTime,
    /// Pushed at.
    #[serde(with = "super::github_date")]
    pub pushed_at: OffsetDateTime,
    /// Homepage.
    pub homepage: Option<String>,
    /// Size (in kilobytes).
    pub size: u64,
    /// Stargazers count.
    pub stargazers_count: u64,
    /// Watchers count.
    pub watchers_count: u64,
    /// Primary language.
    pub language: Option<String>,
    /// Forks count.
    pub forks_count: u64,
    /// Open issues count.
    pub open_issues_count: u64,
    /// Default branch.
    pub default_branch: String,
    /// Search relevance score.
    pub score: f64,
    /// License.
    pub license: Option<GhLicense>,
}
