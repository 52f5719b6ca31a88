//! GitHub transport.
//!
//! Performs HTTP calls against the GitHub API with `reqwest`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod transport;

pub use auth::get_client_builder;
pub use errors::GitHubError;
pub use transport::ReqwestTransport;
