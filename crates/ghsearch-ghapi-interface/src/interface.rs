use async_trait::async_trait;

use crate::{
    types::{GhImage, GhReadme, GhSearchResponse},
    Result,
};

/// GitHub search client interface, as consumed by presentation code.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Search repositories matching a query.
    ///
    /// Starting a search cancels the search in flight, if any. The superseded
    /// call resolves to an error for which [`crate::ApiError::is_cancelled`]
    /// returns `true`.
    async fn search_repositories(&self, query: &str) -> Result<GhSearchResponse>;
    /// Cancel the search in flight. No-op when no search is running.
    fn cancel_current_search(&self);
    /// Fetch an image from an absolute URL.
    async fn fetch_image(&self, url: &str) -> Result<GhImage>;
    /// Fetch the README of a repository.
    async fn fetch_readme(&self, owner: &str, name: &str) -> Result<GhReadme>;
    /// Toggle raw response body logging.
    fn set_debug_mode(&self, enabled: bool);
    /// Is raw response body logging enabled?
    fn is_debug_mode(&self) -> bool;
}
