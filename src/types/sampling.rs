//! Sampling parameters shared by every generation-family operation.

use serde::Serialize;

use super::StylePreset;

/// Prompt, sampler and canvas settings common to generate, transform,
/// inpaint and ControlNet requests (base and SDXL).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) model: Option<String>,
    pub(crate) prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style_preset: Option<StylePreset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) steps: Option<u32>,
    pub(crate) cfg_scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sampler: Option<String>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) upscale: Option<bool>,
}

impl SamplingParams {
    /// Keys this group reads. `upscale` is listed separately since not every
    /// operation accepts it.
    pub const FIELDS: &'static [&'static str] = &[
        "model",
        "prompt",
        "negative_prompt",
        "style_preset",
        "steps",
        "cfg_scale",
        "seed",
        "sampler",
        "width",
        "height",
    ];

    pub const UPSCALE_FIELD: &'static str = "upscale";

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn negative_prompt(&self) -> Option<&str> {
        self.negative_prompt.as_deref()
    }

    pub fn style_preset(&self) -> Option<StylePreset> {
        self.style_preset
    }

    pub fn steps(&self) -> Option<u32> {
        self.steps
    }

    /// Classifier-free guidance weight
    pub fn cfg_scale(&self) -> f64 {
        self.cfg_scale
    }

    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    pub fn sampler(&self) -> Option<&str> {
        self.sampler.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn upscale(&self) -> Option<bool> {
        self.upscale
    }
}
