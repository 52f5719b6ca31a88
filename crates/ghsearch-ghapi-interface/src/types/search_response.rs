use serde::{Deserialize, Serialize};

use super::GhRepository;

/// GitHub repository search page.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct GhSearchResponse {
    /// Total match count, may exceed the returned item count.
    pub total_count: u64,
    /// The search timed out server-side and results are partial.
    pub incomplete_results: bool,
    /// Repositories, in relevance order.
    pub items: Vec<GhRepository>,
}
