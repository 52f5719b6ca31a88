//! Image fetching.

use ghsearch_ghapi_interface::{types::GhImage, ApiError, Result};

use crate::{endpoints::parse_absolute_url, executor::RequestExecutor};

/// Fetches images, independently of each other.
#[derive(Clone)]
pub struct AssetFetcher {
    executor: RequestExecutor,
}

impl AssetFetcher {
    /// Creates a new asset fetcher.
    pub fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    /// Fetch an image from an absolute URL.
    pub async fn fetch_image(&self, url: &str) -> Result<GhImage> {
        let url = parse_absolute_url(url)?;
        let bytes = self.executor.fetch_bytes(&url).await?;

        GhImage::from_bytes(bytes).map_err(ApiError::decoding)
    }
}
