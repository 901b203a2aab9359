//! Typed builder for raw request parameters.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use super::validator::Validator;
use crate::error::Result;
use crate::operation::Operation;
use crate::types::{ControlMode, GenerationRequest, InpaintingFill, MaskInvert, StylePreset};

/// Builds the raw parameter map for any operation.
///
/// Setters do no checking of their own; everything is validated when the
/// map is handed to a [`Validator`].
///
/// ```rust,ignore
/// use prodia_params::{Operation, ParamsBuilder};
///
/// let request = ParamsBuilder::new()
///     .prompt("a red fox")
///     .cfg_scale(7.5)
///     .validate(Operation::Generate)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamsBuilder {
    params: Map<String, Value>,
}

impl ParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary key
    pub fn set<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn model<S: Into<String>>(self, model: S) -> Self {
        self.set("model", model.into())
    }

    pub fn prompt<S: Into<String>>(self, prompt: S) -> Self {
        self.set("prompt", prompt.into())
    }

    pub fn negative_prompt<S: Into<String>>(self, negative_prompt: S) -> Self {
        self.set("negative_prompt", negative_prompt.into())
    }

    pub fn style_preset(self, preset: StylePreset) -> Self {
        self.set("style_preset", preset.as_str())
    }

    pub fn steps(self, steps: u32) -> Self {
        self.set("steps", steps)
    }

    pub fn cfg_scale(self, cfg_scale: f64) -> Self {
        self.set("cfg_scale", cfg_scale)
    }

    pub fn seed(self, seed: i64) -> Self {
        self.set("seed", seed)
    }

    pub fn sampler<S: Into<String>>(self, sampler: S) -> Self {
        self.set("sampler", sampler.into())
    }

    pub fn width(self, width: u32) -> Self {
        self.set("width", width)
    }

    pub fn height(self, height: u32) -> Self {
        self.set("height", height)
    }

    pub fn upscale(self, upscale: bool) -> Self {
        self.set("upscale", upscale)
    }

    pub fn image_url<S: Into<String>>(self, url: S) -> Self {
        self.set("imageUrl", url.into())
    }

    pub fn image_data<S: Into<String>>(self, data: S) -> Self {
        self.set("imageData", data.into())
    }

    /// Set `imageData` from raw bytes
    pub fn image_bytes(self, bytes: &[u8]) -> Self {
        self.set("imageData", STANDARD.encode(bytes))
    }

    pub fn mask_url<S: Into<String>>(self, url: S) -> Self {
        self.set("maskUrl", url.into())
    }

    pub fn mask_data<S: Into<String>>(self, data: S) -> Self {
        self.set("maskData", data.into())
    }

    /// Set `maskData` from raw bytes
    pub fn mask_bytes(self, bytes: &[u8]) -> Self {
        self.set("maskData", STANDARD.encode(bytes))
    }

    pub fn denoising_strength(self, strength: f64) -> Self {
        self.set("denoising_strength", strength)
    }

    pub fn mask_blur(self, blur: u32) -> Self {
        self.set("mask_blur", blur)
    }

    pub fn inpainting_fill(self, fill: InpaintingFill) -> Self {
        self.set("inpainting_fill", fill.code())
    }

    pub fn inpainting_mask_invert(self, invert: MaskInvert) -> Self {
        self.set("inpainting_mask_invert", invert.code())
    }

    pub fn inpainting_full_res(self, full_res: bool) -> Self {
        self.set("inpainting_full_res", full_res)
    }

    pub fn controlnet_model<S: Into<String>>(self, model: S) -> Self {
        self.set("controlnet_model", model.into())
    }

    pub fn controlnet_module<S: Into<String>>(self, module: S) -> Self {
        self.set("controlnet_module", module.into())
    }

    pub fn control_mode(self, mode: ControlMode) -> Self {
        self.set("control_mode", mode.code())
    }

    pub fn threshold_a(self, threshold: f64) -> Self {
        self.set("threshold_a", threshold)
    }

    pub fn threshold_b(self, threshold: f64) -> Self {
        self.set("threshold_b", threshold)
    }

    pub fn resize_mode(self, mode: u32) -> Self {
        self.set("resize_mode", mode)
    }

    /// Upscale factor
    pub fn resize(self, factor: f64) -> Self {
        self.set("resize", factor)
    }

    pub fn source_url<S: Into<String>>(self, url: S) -> Self {
        self.set("sourceUrl", url.into())
    }

    pub fn target_url<S: Into<String>>(self, url: S) -> Self {
        self.set("targetUrl", url.into())
    }

    /// Raw parameter object
    pub fn build(self) -> Value {
        Value::Object(self.params)
    }

    /// Validate for `op` with the default configuration
    pub fn validate(self, op: Operation) -> Result<GenerationRequest> {
        self.validate_with(&Validator::default(), op)
    }

    pub fn validate_with(self, validator: &Validator, op: Operation) -> Result<GenerationRequest> {
        validator.validate(op, &self.build())
    }
}
