//! GitHub search service.

use std::sync::Arc;

use async_trait::async_trait;
use ghsearch_config::Config;
use ghsearch_ghapi_interface::{
    types::{GhImage, GhReadme, GhSearchResponse},
    ApiService, Result, Transport,
};

use crate::{
    assets::AssetFetcher, endpoints::Endpoints, executor::RequestExecutor,
    search::SearchCoordinator,
};

/// GitHub search service, wiring the executor, search coordinator and asset
/// fetcher on a shared transport.
pub struct GitHubApiService {
    executor: RequestExecutor,
    endpoints: Endpoints,
    searches: SearchCoordinator,
    assets: AssetFetcher,
}

impl GitHubApiService {
    /// Creates a new service from configuration and a transport.
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let endpoints = Endpoints::new(&config.api.github.root_url)?;
        let executor = RequestExecutor::new(transport);
        executor.set_debug_mode(config.debug_mode);

        Ok(Self {
            searches: SearchCoordinator::new(executor.clone(), endpoints.clone()),
            assets: AssetFetcher::new(executor.clone()),
            executor,
            endpoints,
        })
    }
}

#[async_trait]
impl ApiService for GitHubApiService {
    #[tracing::instrument(skip(self))]
    async fn search_repositories(&self, query: &str) -> Result<GhSearchResponse> {
        self.searches.search(query).await
    }

    #[tracing::instrument(skip(self))]
    fn cancel_current_search(&self) {
        self.searches.cancel()
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_image(&self, url: &str) -> Result<GhImage> {
        self.assets.fetch_image(url).await
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_readme(&self, owner: &str, name: &str) -> Result<GhReadme> {
        let url = self.endpoints.readme_url(owner, name)?;
        self.executor.fetch_json(&url).await
    }

    fn set_debug_mode(&self, enabled: bool) {
        self.executor.set_debug_mode(enabled)
    }

    fn is_debug_mode(&self) -> bool {
        self.executor.is_debug_mode()
    }
}

#[cfg(test)]
mod tests {
    use ghsearch_ghapi_interface::{ApiError, TransportResponse};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::{
        fixtures::{PNG_DATA, README_DATA, SEARCH_RESPONSE_DATA},
        StubTransport,
    };

    fn arrange(config: &Config) -> (Arc<StubTransport>, GitHubApiService) {
        let transport = Arc::new(StubTransport::new());
        let service = GitHubApiService::new(config, transport.clone()).unwrap();
        (transport, service)
    }

    #[tokio::test]
    async fn test_search_uses_configured_root() {
        let (transport, service) = arrange(&Config::with_root_url("http://localhost:8080/api/"));
        transport.push_response(TransportResponse::new(200, SEARCH_RESPONSE_DATA));

        let response = service.search_repositories("AI").await.unwrap();
        assert_eq!(response.total_count, 2281095);
        assert_eq!(
            transport.urls(),
            vec!["http://localhost:8080/api/search/repositories?q=AI".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_readme() {
        let (transport, service) = arrange(&Config::with_root_url("https://api.github.com"));
        transport.push_response(TransportResponse::new(200, README_DATA));
        transport.push_response(TransportResponse::new(
            404,
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest/repos/contents#get-a-repository-readme","status":"404"}"#,
        ));

        let readme = service.fetch_readme("vercel", "ai").await.unwrap();
        assert_eq!(readme.decoded_content().unwrap(), "# Hello\n\nWorld");

        assert_eq!(
            service.fetch_readme("vercel", "missing").await,
            Err(ApiError::ApiStatus {
                code: 404,
                message: "Not Found".into()
            })
        );
        assert_eq!(
            transport.urls(),
            vec![
                "https://api.github.com/repos/vercel/ai/readme".to_string(),
                "https://api.github.com/repos/vercel/missing/readme".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_readme_invalid_path() {
        let (transport, service) = arrange(&Config::with_root_url("https://api.github.com"));

        assert!(matches!(
            service.fetch_readme("vercel", "ai/../../users").await,
            Err(ApiError::InvalidRequestUrl { .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_image() {
        let (transport, service) = arrange(&Config::with_root_url("https://api.github.com"));
        transport.push_response(TransportResponse::new(200, PNG_DATA));

        let image = service
            .fetch_image("https://avatars.githubusercontent.com/u/14985020?v=4")
            .await
            .unwrap();
        assert_eq!(image.bytes, PNG_DATA.to_vec());
    }

    #[test]
    fn test_debug_mode() {
        let mut config = Config::with_root_url("https://api.github.com");
        let (_, service) = arrange(&config);
        assert!(!service.is_debug_mode());
        service.set_debug_mode(true);
        assert!(service.is_debug_mode());

        config.debug_mode = true;
        let (_, service) = arrange(&config);
        assert!(service.is_debug_mode());
    }

    #[test]
    fn test_invalid_root_url() {
        let config = Config::with_root_url("api.github.com");
        let transport = Arc::new(StubTransport::new());
        assert!(matches!(
            GitHubApiService::new(&config, transport),
            Err(ApiError::InvalidRequestUrl { .. })
        ));
    }
}
