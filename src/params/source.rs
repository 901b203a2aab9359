//! Image and mask source resolution.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use super::reader::FieldReader;
use crate::config::ValidatorConfig;
use crate::error::{ParamsError, Result};
use crate::types::{ImageReference, MaskReference, SourceSlot};

/// Variant chosen for one source slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResolvedSource {
    Url(String),
    Data(String),
}

impl From<ResolvedSource> for ImageReference {
    fn from(source: ResolvedSource) -> Self {
        match source {
            ResolvedSource::Url(url) => Self::Url(url),
            ResolvedSource::Data(data) => Self::Data(data),
        }
    }
}

impl From<ResolvedSource> for MaskReference {
    fn from(source: ResolvedSource) -> Self {
        match source {
            ResolvedSource::Url(url) => Self::Url(url),
            ResolvedSource::Data(data) => Self::Data(data),
        }
    }
}

/// Resolve `imageUrl` / `imageData` from raw input with the default configuration.
///
/// Exactly one of the two keys must be present and non-empty.
pub fn resolve_image_reference(raw: &Value) -> Result<ImageReference> {
    let reader = FieldReader::new(raw)?;
    resolve_source(&reader, SourceSlot::Image, &ValidatorConfig::default()).map(Into::into)
}

/// Resolve `maskUrl` / `maskData` from raw input with the default configuration.
pub fn resolve_mask_reference(raw: &Value) -> Result<MaskReference> {
    let reader = FieldReader::new(raw)?;
    resolve_source(&reader, SourceSlot::Mask, &ValidatorConfig::default()).map(Into::into)
}

pub(crate) fn resolve_source(
    reader: &FieldReader<'_>,
    slot: SourceSlot,
    config: &ValidatorConfig,
) -> Result<ResolvedSource> {
    let url_field = slot.url_field();
    let data_field = slot.data_field();
    let url = reader.string(url_field)?.filter(|s| !s.trim().is_empty());
    let data = reader.string(data_field)?.filter(|s| !s.trim().is_empty());

    match (url, data) {
        (Some(_), Some(_)) => Err(ParamsError::AmbiguousImageSource {
            url_field,
            data_field,
        }),
        (None, None) => Err(ParamsError::MissingImageSource {
            url_field,
            data_field,
        }),
        (Some(url), None) => Ok(ResolvedSource::Url(url.to_string())),
        (None, Some(data)) => {
            check_inline_data(data_field, data, config)?;
            Ok(ResolvedSource::Data(data.to_string()))
        }
    }
}

/// Decode inline data and check its size and format, as configured.
fn check_inline_data(field: &str, data: &str, config: &ValidatorConfig) -> Result<()> {
    if !config.verify_inline_data && config.max_inline_bytes.is_none() {
        return Ok(());
    }

    let summary = || format!("<{} base64 chars>", data.len());
    let expected = if config.verify_inline_data {
        "base64-encoded JPEG or PNG data"
    } else {
        "base64-encoded data"
    };
    let bytes = STANDARD
        .decode(data)
        .map_err(|_| ParamsError::invalid(field, summary(), expected))?;

    if let Some(max) = config.max_inline_bytes
        && bytes.len() > max
    {
        return Err(ParamsError::invalid(
            field,
            summary(),
            format!("at most {max} decoded bytes"),
        ));
    }

    if config.verify_inline_data && !(infer::image::is_jpeg(&bytes) || infer::image::is_png(&bytes))
    {
        return Err(ParamsError::invalid(field, summary(), "JPEG or PNG image data"));
    }

    Ok(())
}
