//! Operation kinds, their routes, and the keys each one accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParamsError;
use crate::types::{
    ControlNetParams, FaceSwapRequest, InpaintingParams, SamplingParams, SourceSlot,
    UpscaleRequest,
};

/// Model family an operation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Stable Diffusion 1.x/2.x, 512px canvas
    Sd,
    /// Stable Diffusion XL, 1024px canvas
    Sdxl,
}

/// Every operation the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Generate,
    Transform,
    Inpaint,
    #[serde(rename = "controlnet")]
    ControlNet,
    SdxlGenerate,
    SdxlTransform,
    SdxlInpaint,
    Upscale,
    #[serde(rename = "faceswap")]
    FaceSwap,
    #[serde(rename = "facerestore")]
    FaceRestore,
}

const DENOISING_FIELD: &str = "denoising_strength";

impl Operation {
    pub const ALL: [Operation; 10] = [
        Self::Generate,
        Self::Transform,
        Self::Inpaint,
        Self::ControlNet,
        Self::SdxlGenerate,
        Self::SdxlTransform,
        Self::SdxlInpaint,
        Self::Upscale,
        Self::FaceSwap,
        Self::FaceRestore,
    ];

    /// Kind tag, as accepted by `FromStr`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Transform => "transform",
            Self::Inpaint => "inpaint",
            Self::ControlNet => "controlnet",
            Self::SdxlGenerate => "sdxl-generate",
            Self::SdxlTransform => "sdxl-transform",
            Self::SdxlInpaint => "sdxl-inpaint",
            Self::Upscale => "upscale",
            Self::FaceSwap => "faceswap",
            Self::FaceRestore => "facerestore",
        }
    }

    /// Service route the request body is posted to
    pub const fn route(self) -> &'static str {
        match self {
            Self::Generate => "/sd/generate",
            Self::Transform => "/sd/transform",
            Self::Inpaint => "/sd/inpainting",
            Self::ControlNet => "/sd/controlnet",
            Self::SdxlGenerate => "/sdxl/generate",
            Self::SdxlTransform => "/sdxl/transform",
            Self::SdxlInpaint => "/sdxl/inpainting",
            Self::Upscale => "/upscale",
            Self::FaceSwap => "/faceswap",
            Self::FaceRestore => "/facerestore",
        }
    }

    /// Model family, for generation-family operations
    pub const fn family(self) -> Option<ModelFamily> {
        match self {
            Self::Generate | Self::Transform | Self::Inpaint | Self::ControlNet => {
                Some(ModelFamily::Sd)
            }
            Self::SdxlGenerate | Self::SdxlTransform | Self::SdxlInpaint => {
                Some(ModelFamily::Sdxl)
            }
            Self::Upscale | Self::FaceSwap | Self::FaceRestore => None,
        }
    }

    /// Whether the operation takes a prompt and sampling parameters
    pub const fn is_generation(self) -> bool {
        self.family().is_some()
    }

    pub const fn takes_image(self) -> bool {
        !matches!(self, Self::Generate | Self::SdxlGenerate | Self::FaceSwap)
    }

    pub const fn takes_mask(self) -> bool {
        self.is_inpaint()
    }

    pub const fn is_inpaint(self) -> bool {
        matches!(self, Self::Inpaint | Self::SdxlInpaint)
    }

    pub const fn accepts_upscale_flag(self) -> bool {
        matches!(
            self,
            Self::Generate
                | Self::Transform
                | Self::Inpaint
                | Self::SdxlTransform
                | Self::SdxlInpaint
        )
    }

    pub const fn accepts_denoising(self) -> bool {
        matches!(
            self,
            Self::Transform | Self::Inpaint | Self::SdxlTransform | Self::SdxlInpaint
        )
    }

    /// Every key this operation reads from raw input.
    pub fn accepted_fields(self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.takes_image() {
            let slot = SourceSlot::Image;
            fields.extend([slot.url_field(), slot.data_field()]);
        }
        if self.takes_mask() {
            let slot = SourceSlot::Mask;
            fields.extend([slot.url_field(), slot.data_field()]);
        }
        if self.is_generation() {
            fields.extend_from_slice(SamplingParams::FIELDS);
        }
        if self.accepts_upscale_flag() {
            fields.push(SamplingParams::UPSCALE_FIELD);
        }
        if self.accepts_denoising() {
            fields.push(DENOISING_FIELD);
        }
        match self {
            Self::Inpaint | Self::SdxlInpaint => fields.extend_from_slice(InpaintingParams::FIELDS),
            Self::ControlNet => fields.extend_from_slice(ControlNetParams::FIELDS),
            Self::Upscale => fields.extend_from_slice(UpscaleRequest::FIELDS),
            Self::FaceSwap => fields.extend_from_slice(FaceSwapRequest::FIELDS),
            _ => {}
        }
        fields
    }

    /// Whether `field` is a key this operation reads
    pub fn accepts(self, field: &str) -> bool {
        self.accepted_fields().iter().any(|accepted| *accepted == field)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|op| op.as_str()).collect();
                ParamsError::invalid("operation", s, format!("one of {}", known.join(", ")))
            })
    }
}
