use thiserror::Error;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SIGNATURE: &[u8] = b"\xff\xd8\xff";
const GIF87_SIGNATURE: &[u8] = b"GIF87a";
const GIF89_SIGNATURE: &[u8] = b"GIF89a";
const RIFF_SIGNATURE: &[u8] = b"RIFF";
const WEBP_SIGNATURE: &[u8] = b"WEBP";

/// Image decoding error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Could not create an image from received data ({size} bytes).")]
pub struct ImageDecodeError {
    /// Received byte count.
    pub size: usize,
}

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhImageFormat {
    /// PNG.
    Png,
    /// JPEG.
    Jpeg,
    /// GIF.
    Gif,
    /// WebP.
    WebP,
}

impl GhImageFormat {
    /// Detect an image format from its leading bytes.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_SIGNATURE) {
            Some(Self::Png)
        } else if bytes.starts_with(JPEG_SIGNATURE) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(GIF87_SIGNATURE) || bytes.starts_with(GIF89_SIGNATURE) {
            Some(Self::Gif)
        } else if bytes.len() >= 12
            && bytes.starts_with(RIFF_SIGNATURE)
            && &bytes[8..12] == WEBP_SIGNATURE
        {
            Some(Self::WebP)
        } else {
            None
        }
    }

    /// MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
        }
    }

    /// Usual file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::WebP => "webp",
        }
    }
}

/// Fetched image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhImage {
    /// Detected format.
    pub format: GhImageFormat,
    /// Raw bytes.
    pub bytes: Vec<u8>,
}

impl GhImage {
    /// Build an image from raw bytes, checking its format.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ImageDecodeError> {
        match GhImageFormat::detect(&bytes) {
            Some(format) => Ok(Self { format, bytes }),
            None => Err(ImageDecodeError { size: bytes.len() }),
        }
    }
}
