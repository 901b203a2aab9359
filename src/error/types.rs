//! Core error type.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ParamsError>;

/// Errors produced while validating and normalizing request parameters.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamsError {
    /// A field the operation cannot run without was absent.
    #[error("missing required field `{0}`")]
    MissingRequiredField(String),

    /// Both the URL key and the inline-data key of a source were supplied.
    #[error("ambiguous source: supply either `{url_field}` or `{data_field}`, not both")]
    AmbiguousImageSource {
        url_field: &'static str,
        data_field: &'static str,
    },

    /// Neither the URL key nor the inline-data key of a source was supplied.
    #[error("missing source: one of `{url_field}` or `{data_field}` is required")]
    MissingImageSource {
        url_field: &'static str,
        data_field: &'static str,
    },

    /// A field was present but outside its allowed domain.
    #[error("invalid value {value} for `{field}`: expected {allowed}")]
    InvalidFieldValue {
        field: String,
        value: String,
        allowed: String,
    },

    /// `style_preset` was not one of the known tags.
    #[error("unrecognized style preset `{0}`")]
    UnrecognizedStylePreset(String),

    /// The raw input could not be read as a JSON object.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A validated record could not be turned into a wire body.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ParamsError {
    /// Create a `MissingRequiredField` error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField(field.into())
    }

    /// Create an `InvalidFieldValue` error
    pub fn invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
            allowed: allowed.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one.
    ///
    /// Source errors report the URL-style key.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField(field) | Self::InvalidFieldValue { field, .. } => {
                Some(field.as_str())
            }
            Self::AmbiguousImageSource { url_field, .. }
            | Self::MissingImageSource { url_field, .. } => Some(*url_field),
            Self::UnrecognizedStylePreset(_) => Some("style_preset"),
            Self::MalformedInput(_) | Self::Serialization(_) => None,
        }
    }

    /// Nothing here is worth retrying; the same input fails the same way.
    pub const fn is_retryable(&self) -> bool {
        false
    }
}
