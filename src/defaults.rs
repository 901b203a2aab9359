//! Per-operation default table.
//!
//! Operations sharing a field name do not share its default (base `Generate`
//! uses `cfg_scale` 20 while `Transform` uses 7), so defaults are looked up by
//! operation, never by field alone. `None` means the field stays unset when
//! the caller omits it.

use crate::operation::Operation;
use crate::types::{InpaintingFill, MaskInvert};

/// Model used by `Transform` when the caller names none.
pub const TRANSFORM_DEFAULT_MODEL: &str = "v1-5-pruned-emaonly.safetensors [d7049739]";

/// Defaults applied to absent optional fields of one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefaults {
    pub model: Option<&'static str>,
    pub steps: Option<u32>,
    pub cfg_scale: Option<f64>,
    pub seed: Option<i64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub denoising_strength: Option<f64>,
    pub mask_blur: Option<u32>,
    pub inpainting_fill: Option<InpaintingFill>,
    pub inpainting_mask_invert: Option<MaskInvert>,
    pub inpainting_full_res: Option<bool>,
    pub threshold_a: Option<f64>,
    pub threshold_b: Option<f64>,
}

impl OperationDefaults {
    const NONE: Self = Self {
        model: None,
        steps: None,
        cfg_scale: None,
        seed: None,
        width: None,
        height: None,
        denoising_strength: None,
        mask_blur: None,
        inpainting_fill: None,
        inpainting_mask_invert: None,
        inpainting_full_res: None,
        threshold_a: None,
        threshold_b: None,
    };

    const SD_CANVAS: Self = Self {
        width: Some(512),
        height: Some(512),
        ..Self::NONE
    };

    const SDXL_BASE: Self = Self {
        width: Some(1024),
        height: Some(1024),
        steps: Some(20),
        cfg_scale: Some(7.0),
        ..Self::NONE
    };

    const INPAINT_MASK: Self = Self {
        mask_blur: Some(4),
        inpainting_fill: Some(InpaintingFill::Fill),
        inpainting_mask_invert: Some(MaskInvert::InpaintNotMasked),
        inpainting_full_res: Some(true),
        ..Self::NONE
    };

    /// Default table for `op`
    pub const fn for_operation(op: Operation) -> Self {
        match op {
            Operation::Generate => Self {
                cfg_scale: Some(20.0),
                seed: Some(7),
                ..Self::SD_CANVAS
            },
            Operation::Transform => Self {
                model: Some(TRANSFORM_DEFAULT_MODEL),
                denoising_strength: Some(0.7),
                steps: Some(20),
                cfg_scale: Some(7.0),
                ..Self::SD_CANVAS
            },
            Operation::Inpaint => Self {
                cfg_scale: Some(20.0),
                seed: Some(7),
                width: Some(512),
                height: Some(512),
                ..Self::INPAINT_MASK
            },
            Operation::ControlNet => Self {
                steps: Some(20),
                cfg_scale: Some(7.0),
                threshold_a: Some(100.0),
                threshold_b: Some(200.0),
                ..Self::SD_CANVAS
            },
            Operation::SdxlGenerate => Self::SDXL_BASE,
            Operation::SdxlTransform => Self {
                denoising_strength: Some(0.7),
                ..Self::SDXL_BASE
            },
            Operation::SdxlInpaint => Self {
                denoising_strength: Some(0.7),
                steps: Some(20),
                cfg_scale: Some(7.0),
                width: Some(1024),
                height: Some(1024),
                ..Self::INPAINT_MASK
            },
            Operation::Upscale | Operation::FaceSwap | Operation::FaceRestore => Self::NONE,
        }
    }
}
