//! GitHub types.

mod api_error_envelope;
mod github_date;
mod image;
mod license;
mod owner;
mod readme;
mod repository;
mod search_response;

pub use api_error_envelope::{GhApiErrorDetail, GhApiErrorEnvelope};
pub use image::{GhImage, GhImageFormat, ImageDecodeError};
pub use license::GhLicense;
pub use owner::GhOwner;
pub use readme::{GhReadme, GhReadmeLinks, ReadmeContentError};
pub use repository::GhRepository;
pub use search_response::GhSearchResponse;
