//! GitHub search API interface.
//!
//! Entities, error taxonomy and the capabilities the search client is built on.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
mod transport;
pub mod types;

pub use errors::{ApiError, Result, TransportError};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
pub use interface::ApiService;
#[cfg(any(test, feature = "testkit"))]
pub use transport::MockTransport;
pub use transport::{Transport, TransportResponse};
