//! Inpainting-specific parameters.

use serde::Serialize;

use super::{InpaintingFill, MaskInvert};

/// Mask handling for inpainting requests. Every field is always resolved,
/// from input or from the operation's defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InpaintingParams {
    pub(crate) mask_blur: u32,
    pub(crate) inpainting_fill: InpaintingFill,
    pub(crate) inpainting_mask_invert: MaskInvert,
    /// `true` renders only the masked area at full resolution, `false` the whole picture.
    pub(crate) inpainting_full_res: bool,
}

impl InpaintingParams {
    pub const FIELDS: &'static [&'static str] = &[
        "mask_blur",
        "inpainting_fill",
        "inpainting_mask_invert",
        "inpainting_full_res",
    ];

    pub fn mask_blur(&self) -> u32 {
        self.mask_blur
    }

    pub fn inpainting_fill(&self) -> InpaintingFill {
        self.inpainting_fill
    }

    pub fn inpainting_mask_invert(&self) -> MaskInvert {
        self.inpainting_mask_invert
    }

    pub fn inpainting_full_res(&self) -> bool {
        self.inpainting_full_res
    }
}
