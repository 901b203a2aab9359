//! Image and mask sources.
//!
//! A source is either a remote URL or base64-encoded inline data, never both.
//! The variant decides which wire key is emitted (`imageUrl` vs `imageData`,
//! `maskUrl` vs `maskData`).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

/// Input image for transform, inpaint, ControlNet, upscale and face-restore requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ImageReference {
    /// JPEG or PNG reachable at a URL
    #[serde(rename = "imageUrl")]
    Url(String),
    /// Base64-encoded JPEG or PNG bytes
    #[serde(rename = "imageData")]
    Data(String),
}

/// Inpainting mask. Same shape as [`ImageReference`], with its own wire keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MaskReference {
    #[serde(rename = "maskUrl")]
    Url(String),
    #[serde(rename = "maskData")]
    Data(String),
}

/// Which pair of keys a source is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSlot {
    Image,
    Mask,
}

impl SourceSlot {
    /// Key carrying the URL variant
    pub const fn url_field(self) -> &'static str {
        match self {
            Self::Image => "imageUrl",
            Self::Mask => "maskUrl",
        }
    }

    /// Key carrying the inline-data variant
    pub const fn data_field(self) -> &'static str {
        match self {
            Self::Image => "imageData",
            Self::Mask => "maskData",
        }
    }
}

impl ImageReference {
    /// Reference an image by URL
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Reference an image by base64 data
    pub fn data(data: impl Into<String>) -> Self {
        Self::Data(data.into())
    }

    /// Reference raw image bytes, base64-encoding them
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::Data(STANDARD.encode(bytes))
    }

    /// Get as URL if available
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Data(_) => None,
        }
    }

    /// Get as base64 data if available
    pub fn as_data(&self) -> Option<&str> {
        match self {
            Self::Data(data) => Some(data),
            Self::Url(_) => None,
        }
    }

    /// Check if this is a URL
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl MaskReference {
    /// Reference a mask by URL
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Reference a mask by base64 data
    pub fn data(data: impl Into<String>) -> Self {
        Self::Data(data.into())
    }

    /// Reference raw mask bytes, base64-encoding them
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::Data(STANDARD.encode(bytes))
    }

    /// Get as URL if available
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Data(_) => None,
        }
    }

    /// Get as base64 data if available
    pub fn as_data(&self) -> Option<&str> {
        match self {
            Self::Data(data) => Some(data),
            Self::Url(_) => None,
        }
    }

    /// Check if this is a URL
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}
