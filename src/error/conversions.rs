//! Type Conversions for ParamsError

use super::types::ParamsError;

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
