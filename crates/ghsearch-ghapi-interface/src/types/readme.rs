use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BASE64_ENCODING: &str = "base64";

/// README content decoding error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ReadmeContentError {
    #[error("Could not decode README content as base64,\n  caused by: {}", source)]
    Base64 { source: base64::DecodeError },

    #[error("README content is not valid UTF-8,\n  caused by: {}", source)]
    Utf8 { source: std::string::FromUtf8Error },
}

/// README links.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhReadmeLinks {
    /// API URL.
    #[serde(rename = "self")]
    pub self_url: String,
    /// Git URL.
    pub git: String,
    /// HTML URL.
    pub html: String,
}

/// GitHub repository README.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhReadme {
    /// File name.
    pub name: String,
    /// File path.
    pub path: String,
    /// Blob SHA.
    pub sha: String,
    /// Size in bytes.
    pub size: u64,
    /// API URL.
    pub url: String,
    /// HTML URL.
    pub html_url: String,
    /// Git URL.
    pub git_url: String,
    /// Raw download URL.
    pub download_url: String,
    /// Entry type (`file`).
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Encoded content.
    pub content: String,
    /// Content encoding.
    pub encoding: String,
    /// Links.
    #[serde(rename = "_links")]
    pub links: GhReadmeLinks,
}

impl GhReadme {
    /// Decode README content as text.
    ///
    /// Base64 content is decoded, skipping line breaks. Other encodings are
    /// returned as-is.
    pub fn decoded_content(&self) -> Result<String, ReadmeContentError> {
        if self.encoding != BASE64_ENCODING {
            return Ok(self.content.clone());
        }

        let stripped: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(stripped)
            .map_err(|e| ReadmeContentError::Base64 { source: e })?;

        String::from_utf8(bytes).map_err(|e| ReadmeContentError::Utf8 { source: e })
    }
}
