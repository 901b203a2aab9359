//! Style preset tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParamsError;

/// Closed set of style tags used to bias generation.
///
/// Anything outside this set is rejected with
/// [`ParamsError::UnrecognizedStylePreset`] before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    #[serde(rename = "3d-model")]
    ThreeDModel,
    AnalogFilm,
    Anime,
    Cinematic,
    ComicBook,
    DigitalArt,
    Enhance,
    #[serde(alias = "fantasty-art")]
    FantasyArt,
    Isometric,
    LineArt,
    LowPoly,
    NeonPunk,
    Origami,
    Photographic,
    PixelArt,
    Texture,
    CraftClay,
}

impl StylePreset {
    /// Every preset, in wire-tag order.
    pub const ALL: [StylePreset; 17] = [
        Self::ThreeDModel,
        Self::AnalogFilm,
        Self::Anime,
        Self::Cinematic,
        Self::ComicBook,
        Self::DigitalArt,
        Self::Enhance,
        Self::FantasyArt,
        Self::Isometric,
        Self::LineArt,
        Self::LowPoly,
        Self::NeonPunk,
        Self::Origami,
        Self::Photographic,
        Self::PixelArt,
        Self::Texture,
        Self::CraftClay,
    ];

    /// Wire tag sent to the service
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreeDModel => "3d-model",
            Self::AnalogFilm => "analog-film",
            Self::Anime => "anime",
            Self::Cinematic => "cinematic",
            Self::ComicBook => "comic-book",
            Self::DigitalArt => "digital-art",
            Self::Enhance => "enhance",
            Self::FantasyArt => "fantasy-art",
            Self::Isometric => "isometric",
            Self::LineArt => "line-art",
            Self::LowPoly => "low-poly",
            Self::NeonPunk => "neon-punk",
            Self::Origami => "origami",
            Self::Photographic => "photographic",
            Self::PixelArt => "pixel-art",
            Self::Texture => "texture",
            Self::CraftClay => "craft-clay",
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StylePreset {
    type Err = ParamsError;

    /// Exact, case-sensitive match on the wire tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Older clients shipped this misspelling.
        if s == "fantasty-art" {
            return Ok(Self::FantasyArt);
        }
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| ParamsError::UnrecognizedStylePreset(s.to_string()))
    }
}
