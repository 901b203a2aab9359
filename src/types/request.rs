//! Canonical request records.
//!
//! Records are only produced by the validator, so every value in them has
//! already been checked and every documented default applied. They serialize
//! straight into the wire body.

use serde::Serialize;

use super::{ControlNetParams, ImageReference, InpaintingParams, MaskReference, SamplingParams};
use crate::operation::Operation;

/// Text-to-image request (`Generate`, `SdxlGenerate`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextToImageRequest {
    #[serde(flatten)]
    pub(crate) sampling: SamplingParams,
}

impl TextToImageRequest {
    pub fn sampling(&self) -> &SamplingParams {
        &self.sampling
    }
}

/// Image-to-image request (`Transform`, `SdxlTransform`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageToImageRequest {
    #[serde(flatten)]
    pub(crate) image: ImageReference,
    pub(crate) denoising_strength: f64,
    #[serde(flatten)]
    pub(crate) sampling: SamplingParams,
}

impl ImageToImageRequest {
    pub fn image(&self) -> &ImageReference {
        &self.image
    }

    /// How far the output may drift from the input image, in [0, 1]
    pub fn denoising_strength(&self) -> f64 {
        self.denoising_strength
    }

    pub fn sampling(&self) -> &SamplingParams {
        &self.sampling
    }
}

/// Inpainting request (`Inpaint`, `SdxlInpaint`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InpaintRequest {
    #[serde(flatten)]
    pub(crate) image: ImageReference,
    #[serde(flatten)]
    pub(crate) mask: MaskReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) denoising_strength: Option<f64>,
    #[serde(flatten)]
    pub(crate) sampling: SamplingParams,
    #[serde(flatten)]
    pub(crate) inpainting: InpaintingParams,
}

impl InpaintRequest {
    pub fn image(&self) -> &ImageReference {
        &self.image
    }

    pub fn mask(&self) -> &MaskReference {
        &self.mask
    }

    pub fn denoising_strength(&self) -> Option<f64> {
        self.denoising_strength
    }

    pub fn sampling(&self) -> &SamplingParams {
        &self.sampling
    }

    pub fn inpainting(&self) -> &InpaintingParams {
        &self.inpainting
    }
}

/// ControlNet-guided generation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlNetRequest {
    #[serde(flatten)]
    pub(crate) image: ImageReference,
    #[serde(flatten)]
    pub(crate) sampling: SamplingParams,
    #[serde(flatten)]
    pub(crate) controlnet: ControlNetParams,
}

impl ControlNetRequest {
    pub fn image(&self) -> &ImageReference {
        &self.image
    }

    pub fn sampling(&self) -> &SamplingParams {
        &self.sampling
    }

    pub fn controlnet(&self) -> &ControlNetParams {
        &self.controlnet
    }
}

/// Upscale request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpscaleRequest {
    #[serde(flatten)]
    pub(crate) image: ImageReference,
    pub(crate) resize: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) model: Option<String>,
}

impl UpscaleRequest {
    pub const FIELDS: &'static [&'static str] = &["resize", "model"];

    pub fn image(&self) -> &ImageReference {
        &self.image
    }

    /// Resize factor
    pub fn resize(&self) -> f64 {
        self.resize
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

/// Face swap request.
///
/// Both images must be URLs; the service does not take inline data here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceSwapRequest {
    #[serde(rename = "sourceUrl")]
    pub(crate) source_url: String,
    #[serde(rename = "targetUrl")]
    pub(crate) target_url: String,
}

impl FaceSwapRequest {
    pub const FIELDS: &'static [&'static str] = &["sourceUrl", "targetUrl"];

    /// Original image
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Image containing the face to put in
    pub fn target_url(&self) -> &str {
        &self.target_url
    }
}

/// Face restoration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceRestoreRequest {
    #[serde(flatten)]
    pub(crate) image: ImageReference,
}

impl FaceRestoreRequest {
    pub fn image(&self) -> &ImageReference {
        &self.image
    }
}

/// A validated, fully-specified request for one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationRequest {
    Generate(TextToImageRequest),
    Transform(ImageToImageRequest),
    Inpaint(InpaintRequest),
    ControlNet(ControlNetRequest),
    SdxlGenerate(TextToImageRequest),
    SdxlTransform(ImageToImageRequest),
    SdxlInpaint(InpaintRequest),
    Upscale(UpscaleRequest),
    FaceSwap(FaceSwapRequest),
    FaceRestore(FaceRestoreRequest),
}

impl GenerationRequest {
    /// Operation this record was validated for
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Generate(_) => Operation::Generate,
            Self::Transform(_) => Operation::Transform,
            Self::Inpaint(_) => Operation::Inpaint,
            Self::ControlNet(_) => Operation::ControlNet,
            Self::SdxlGenerate(_) => Operation::SdxlGenerate,
            Self::SdxlTransform(_) => Operation::SdxlTransform,
            Self::SdxlInpaint(_) => Operation::SdxlInpaint,
            Self::Upscale(_) => Operation::Upscale,
            Self::FaceSwap(_) => Operation::FaceSwap,
            Self::FaceRestore(_) => Operation::FaceRestore,
        }
    }

    /// Sampling parameters, for generation-family operations
    pub fn sampling(&self) -> Option<&SamplingParams> {
        match self {
            Self::Generate(req) | Self::SdxlGenerate(req) => Some(&req.sampling),
            Self::Transform(req) | Self::SdxlTransform(req) => Some(&req.sampling),
            Self::Inpaint(req) | Self::SdxlInpaint(req) => Some(&req.sampling),
            Self::ControlNet(req) => Some(&req.sampling),
            Self::Upscale(_) | Self::FaceSwap(_) | Self::FaceRestore(_) => None,
        }
    }

    /// Input image, for operations that take one
    pub fn image(&self) -> Option<&ImageReference> {
        match self {
            Self::Transform(req) | Self::SdxlTransform(req) => Some(&req.image),
            Self::Inpaint(req) | Self::SdxlInpaint(req) => Some(&req.image),
            Self::ControlNet(req) => Some(&req.image),
            Self::Upscale(req) => Some(&req.image),
            Self::FaceRestore(req) => Some(&req.image),
            Self::Generate(_) | Self::SdxlGenerate(_) | Self::FaceSwap(_) => None,
        }
    }

    /// Inpainting mask, for inpaint operations
    pub fn mask(&self) -> Option<&MaskReference> {
        match self {
            Self::Inpaint(req) | Self::SdxlInpaint(req) => Some(&req.mask),
            _ => None,
        }
    }
}
