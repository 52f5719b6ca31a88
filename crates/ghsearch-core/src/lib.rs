//! GitHub search client core.
//!
//! Request execution, status classification, response decoding and
//! single-flight search coordination, on top of an injected [`Transport`].
//!
//! [`Transport`]: ghsearch_ghapi_interface::Transport

#![warn(missing_docs)]
#![warn(clippy::all)]

mod assets;
mod decoder;
mod endpoints;
mod executor;
mod search;
mod service;
mod status;
#[cfg(test)]
mod tests;

pub use assets::AssetFetcher;
pub use decoder::decode_json;
pub use endpoints::Endpoints;
pub use executor::RequestExecutor;
pub use search::SearchCoordinator;
pub use service::GitHubApiService;
pub use status::{check_status, is_success};
