//! ControlNet-specific parameters.

use serde::Serialize;

use super::ControlMode;

/// Conditioning settings for ControlNet-guided generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlNetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) controlnet_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) controlnet_module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) control_mode: Option<ControlMode>,
    /// Preprocessor low threshold
    pub(crate) threshold_a: f64,
    /// Preprocessor high threshold
    pub(crate) threshold_b: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) resize_mode: Option<u32>,
}

impl ControlNetParams {
    pub const FIELDS: &'static [&'static str] = &[
        "controlnet_model",
        "controlnet_module",
        "control_mode",
        "threshold_a",
        "threshold_b",
        "resize_mode",
    ];

    pub fn controlnet_model(&self) -> Option<&str> {
        self.controlnet_model.as_deref()
    }

    pub fn controlnet_module(&self) -> Option<&str> {
        self.controlnet_module.as_deref()
    }

    pub fn control_mode(&self) -> Option<ControlMode> {
        self.control_mode
    }

    pub fn threshold_a(&self) -> f64 {
        self.threshold_a
    }

    pub fn threshold_b(&self) -> f64 {
        self.threshold_b
    }

    pub fn resize_mode(&self) -> Option<u32> {
        self.resize_mode
    }
}
