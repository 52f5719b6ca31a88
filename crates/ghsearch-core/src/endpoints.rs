//! Endpoint URL building.

use ghsearch_ghapi_interface::{ApiError, Result};
use url::Url;

/// Characters that cannot appear verbatim in a URL query.
const FORBIDDEN_QUERY_CHARACTERS: &[char] =
    &[' ', '"', '#', '<', '>', '\\', '^', '`', '{', '|', '}'];

/// GitHub API endpoints, relative to a root URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    root_url: String,
}

impl Endpoints {
    /// Build endpoints from an API root URL.
    pub fn new(root_url: &str) -> Result<Self> {
        let root_url = root_url.trim_end_matches('/');
        parse_url(root_url)?;

        Ok(Self {
            root_url: root_url.into(),
        })
    }

    /// API root URL, without trailing slash.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Repository search URL, with `query` embedded verbatim.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let raw_url = format!("{}/search/repositories?q={}", self.root_url, query);
        if query
            .chars()
            .any(|c| c.is_ascii_control() || FORBIDDEN_QUERY_CHARACTERS.contains(&c))
        {
            return Err(ApiError::InvalidRequestUrl { url: raw_url });
        }

        parse_url(&raw_url)
    }

    /// Repository README URL.
    pub fn readme_url(&self, owner: &str, name: &str) -> Result<Url> {
        let raw_url = format!("{}/repos/{}/{}/readme", self.root_url, owner, name);
        if !is_valid_path_segment(owner) || !is_valid_path_segment(name) {
            return Err(ApiError::InvalidRequestUrl { url: raw_url });
        }

        parse_url(&raw_url)
    }
}

/// Parse an absolute HTTP(S) URL, such as an avatar URL.
pub(crate) fn parse_absolute_url(raw_url: &str) -> Result<Url> {
    let url = parse_url(raw_url)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ApiError::InvalidRequestUrl {
            url: raw_url.into(),
        }),
    }
}

fn parse_url(raw_url: &str) -> Result<Url> {
    Url::parse(raw_url).map_err(|_| ApiError::InvalidRequestUrl {
        url: raw_url.into(),
    })
}

fn is_valid_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
