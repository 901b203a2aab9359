//! Validator / normalizer.
//!
//! Turns raw caller input for one operation into a canonical
//! [`GenerationRequest`], applying the operation's defaults. Validation is
//! fail-fast: the first problem found is returned and no partial record is
//! produced.

use std::fmt::Debug;

use serde_json::Value;

use super::reader::{FieldReader, NumberDomain, render_value};
use super::source::resolve_source;
use crate::config::ValidatorConfig;
use crate::defaults::OperationDefaults;
use crate::error::{ParamsError, Result};
use crate::operation::Operation;
use crate::types::{
    ControlMode, ControlNetParams, ControlNetRequest, FaceRestoreRequest, FaceSwapRequest,
    GenerationRequest, ImageReference, ImageToImageRequest, InpaintRequest, InpaintingFill,
    InpaintingParams, MaskInvert, SamplingParams, SourceSlot, StylePreset, TextToImageRequest,
    UpscaleRequest,
};

/// Validate raw input for `op` with the default configuration.
pub fn validate(op: Operation, raw: &Value) -> Result<GenerationRequest> {
    Validator::default().validate(op, raw)
}

/// Stateless validator; one instance can be shared across threads and calls.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate JSON text for `op`.
    pub fn validate_str(&self, op: Operation, json: &str) -> Result<GenerationRequest> {
        let raw: Value = serde_json::from_str(json)?;
        self.validate(op, &raw)
    }

    /// Validate raw input for `op` and produce its canonical record.
    pub fn validate(&self, op: Operation, raw: &Value) -> Result<GenerationRequest> {
        let reader = FieldReader::new(raw)?;
        check_required(op, &reader)?;
        let style_preset = style_preset(&reader)?;

        let defaults = OperationDefaults::for_operation(op);
        let request = match op {
            Operation::Generate | Operation::SdxlGenerate => {
                let req = TextToImageRequest {
                    sampling: sampling(op, &reader, &defaults, style_preset)?,
                };
                if op == Operation::Generate {
                    GenerationRequest::Generate(req)
                } else {
                    GenerationRequest::SdxlGenerate(req)
                }
            }
            Operation::Transform | Operation::SdxlTransform => {
                let req = self.image_to_image(op, &reader, &defaults, style_preset)?;
                if op == Operation::Transform {
                    GenerationRequest::Transform(req)
                } else {
                    GenerationRequest::SdxlTransform(req)
                }
            }
            Operation::Inpaint | Operation::SdxlInpaint => {
                let req = self.inpaint(op, &reader, &defaults, style_preset)?;
                if op == Operation::Inpaint {
                    GenerationRequest::Inpaint(req)
                } else {
                    GenerationRequest::SdxlInpaint(req)
                }
            }
            Operation::ControlNet => GenerationRequest::ControlNet(ControlNetRequest {
                image: self.image(&reader)?,
                sampling: sampling(op, &reader, &defaults, style_preset)?,
                controlnet: controlnet(&reader, &defaults)?,
            }),
            Operation::Upscale => GenerationRequest::Upscale(UpscaleRequest {
                image: self.image(&reader)?,
                resize: reader
                    .number("resize", NumberDomain::Positive)?
                    .ok_or_else(|| ParamsError::missing("resize"))?,
                model: reader.identifier("model")?,
            }),
            Operation::FaceSwap => GenerationRequest::FaceSwap(FaceSwapRequest {
                source_url: reader.required_string("sourceUrl")?.to_string(),
                target_url: reader.required_string("targetUrl")?.to_string(),
            }),
            Operation::FaceRestore => GenerationRequest::FaceRestore(FaceRestoreRequest {
                image: self.image(&reader)?,
            }),
        };

        self.check_unknown_fields(op, &reader)?;
        tracing::debug!(operation = %op, route = op.route(), "validated request parameters");
        Ok(request)
    }

    fn image(&self, reader: &FieldReader<'_>) -> Result<ImageReference> {
        resolve_source(reader, SourceSlot::Image, &self.config).map(Into::into)
    }

    fn image_to_image(
        &self,
        op: Operation,
        reader: &FieldReader<'_>,
        defaults: &OperationDefaults,
        style_preset: Option<StylePreset>,
    ) -> Result<ImageToImageRequest> {
        let image = self.image(reader)?;
        let denoising_strength = with_default(
            "denoising_strength",
            reader.number("denoising_strength", NumberDomain::UnitInterval)?,
            defaults.denoising_strength,
        )
        .ok_or_else(|| ParamsError::missing("denoising_strength"))?;
        Ok(ImageToImageRequest {
            image,
            denoising_strength,
            sampling: sampling(op, reader, defaults, style_preset)?,
        })
    }

    fn inpaint(
        &self,
        op: Operation,
        reader: &FieldReader<'_>,
        defaults: &OperationDefaults,
        style_preset: Option<StylePreset>,
    ) -> Result<InpaintRequest> {
        let image = self.image(reader)?;
        let mask = resolve_source(reader, SourceSlot::Mask, &self.config)?.into();
        let denoising_strength = with_default(
            "denoising_strength",
            reader.number("denoising_strength", NumberDomain::UnitInterval)?,
            defaults.denoising_strength,
        );
        // Width and height always resolve (input or default table), so the
        // service receives an explicit canvas even for full-res inpainting.
        let sampling = sampling(op, reader, defaults, style_preset)?;
        let inpainting = inpainting(reader, defaults)?;
        check_canvas(&sampling, &inpainting)?;
        Ok(InpaintRequest {
            image,
            mask,
            denoising_strength,
            sampling,
            inpainting,
        })
    }

    fn check_unknown_fields(&self, op: Operation, reader: &FieldReader<'_>) -> Result<()> {
        let accepted = op.accepted_fields();
        for field in reader
            .present_keys()
            .filter(|field| !accepted.iter().any(|known| known == field))
        {
            if self.config.strict_fields {
                let value = reader.get(field).map(render_value).unwrap_or_default();
                return Err(ParamsError::invalid(
                    field,
                    value,
                    format!("a field accepted by `{op}`"),
                ));
            }
            tracing::warn!(field, operation = %op, "ignoring field not accepted by operation");
        }
        Ok(())
    }
}

fn check_required(op: Operation, reader: &FieldReader<'_>) -> Result<()> {
    if op.is_generation() {
        reader.required_string("prompt")?;
    }
    match op {
        Operation::ControlNet => {
            reader.required_string("model")?;
        }
        Operation::Upscale => {
            if reader.get("resize").is_none() {
                return Err(ParamsError::missing("resize"));
            }
        }
        Operation::FaceSwap => {
            reader.required_string("sourceUrl")?;
            reader.required_string("targetUrl")?;
        }
        _ => {}
    }
    Ok(())
}

/// Checked for every operation, so an unknown tag is always reported as such.
fn style_preset(reader: &FieldReader<'_>) -> Result<Option<StylePreset>> {
    reader
        .string("style_preset")?
        .map(str::parse::<StylePreset>)
        .transpose()
}

fn with_default<T: Copy + Debug>(field: &str, value: Option<T>, default: Option<T>) -> Option<T> {
    if value.is_some() {
        return value;
    }
    if let Some(default) = default {
        tracing::trace!(field, ?default, "applying default");
    }
    default
}

fn sampling(
    op: Operation,
    reader: &FieldReader<'_>,
    defaults: &OperationDefaults,
    style_preset: Option<StylePreset>,
) -> Result<SamplingParams> {
    let model = match reader.identifier("model")? {
        Some(model) => Some(model),
        None => with_default("model", None, defaults.model).map(str::to_string),
    };
    let prompt = reader.required_string("prompt")?.to_string();
    let negative_prompt = reader.string("negative_prompt")?.map(str::to_string);
    let steps = with_default("steps", reader.integer("steps", 1)?, defaults.steps);
    let cfg_scale = with_default(
        "cfg_scale",
        reader.number("cfg_scale", NumberDomain::Positive)?,
        defaults.cfg_scale,
    )
    .ok_or_else(|| ParamsError::missing("cfg_scale"))?;
    let seed = with_default("seed", reader.signed("seed")?, defaults.seed);
    let sampler = reader.identifier("sampler")?;
    let width = with_default("width", reader.integer("width", 1)?, defaults.width)
        .ok_or_else(|| ParamsError::missing("width"))?;
    let height = with_default("height", reader.integer("height", 1)?, defaults.height)
        .ok_or_else(|| ParamsError::missing("height"))?;
    let upscale = if op.accepts_upscale_flag() {
        reader.boolean(SamplingParams::UPSCALE_FIELD)?
    } else {
        None
    };

    Ok(SamplingParams {
        model,
        prompt,
        negative_prompt,
        style_preset,
        steps,
        cfg_scale,
        seed,
        sampler,
        width,
        height,
        upscale,
    })
}

fn inpainting(reader: &FieldReader<'_>, defaults: &OperationDefaults) -> Result<InpaintingParams> {
    let mask_blur = with_default("mask_blur", reader.integer("mask_blur", 0)?, defaults.mask_blur)
        .ok_or_else(|| ParamsError::missing("mask_blur"))?;
    let inpainting_fill = with_default(
        "inpainting_fill",
        reader.coded(
            "inpainting_fill",
            InpaintingFill::from_code,
            InpaintingFill::DOMAIN,
        )?,
        defaults.inpainting_fill,
    )
    .ok_or_else(|| ParamsError::missing("inpainting_fill"))?;
    let inpainting_mask_invert = with_default(
        "inpainting_mask_invert",
        reader.coded(
            "inpainting_mask_invert",
            MaskInvert::from_code,
            MaskInvert::DOMAIN,
        )?,
        defaults.inpainting_mask_invert,
    )
    .ok_or_else(|| ParamsError::missing("inpainting_mask_invert"))?;
    let inpainting_full_res = with_default(
        "inpainting_full_res",
        reader.boolean("inpainting_full_res")?,
        defaults.inpainting_full_res,
    )
    .ok_or_else(|| ParamsError::missing("inpainting_full_res"))?;

    Ok(InpaintingParams {
        mask_blur,
        inpainting_fill,
        inpainting_mask_invert,
        inpainting_full_res,
    })
}

/// Full-res inpainting still needs a positive canvas on the wire.
///
/// Read values are already `>= 1` and both inpaint rows carry a canvas
/// default, so this only fires if a default-table entry loses its canvas.
fn check_canvas(sampling: &SamplingParams, inpainting: &InpaintingParams) -> Result<()> {
    if !inpainting.inpainting_full_res {
        return Ok(());
    }
    for (field, value) in [("width", sampling.width), ("height", sampling.height)] {
        if value == 0 {
            return Err(ParamsError::invalid(field, value.to_string(), "integer >= 1"));
        }
    }
    Ok(())
}

fn controlnet(reader: &FieldReader<'_>, defaults: &OperationDefaults) -> Result<ControlNetParams> {
    Ok(ControlNetParams {
        controlnet_model: reader.identifier("controlnet_model")?,
        controlnet_module: reader.identifier("controlnet_module")?,
        control_mode: reader.coded("control_mode", ControlMode::from_code, ControlMode::DOMAIN)?,
        threshold_a: with_default(
            "threshold_a",
            reader.number("threshold_a", NumberDomain::Finite)?,
            defaults.threshold_a,
        )
        .ok_or_else(|| ParamsError::missing("threshold_a"))?,
        threshold_b: with_default(
            "threshold_b",
            reader.number("threshold_b", NumberDomain::Finite)?,
            defaults.threshold_b,
        )
        .ok_or_else(|| ParamsError::missing("threshold_b"))?,
        resize_mode: reader.integer("resize_mode", 0)?,
    })
}
