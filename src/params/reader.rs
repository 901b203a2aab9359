//! Typed access to loosely-typed raw input.
//!
//! No coercion happens here: a string is never read as a number, a fractional
//! number never as an integer. `null` counts as absent.

use serde_json::{Map, Value};

use crate::error::{ParamsError, Result};

const MAX_RENDERED_VALUE: usize = 64;

/// Numeric domains checked by [`FieldReader::number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberDomain {
    /// Strictly greater than zero
    Positive,
    /// Closed interval [0, 1]
    UnitInterval,
    /// Any finite number
    Finite,
}

impl NumberDomain {
    fn contains(self, value: f64) -> bool {
        value.is_finite()
            && match self {
                Self::Positive => value > 0.0,
                Self::UnitInterval => (0.0..=1.0).contains(&value),
                Self::Finite => true,
            }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Positive => "number > 0",
            Self::UnitInterval => "number in [0, 1]",
            Self::Finite => "finite number",
        }
    }
}

/// Render an offending value for an error message, truncating long ones.
pub(crate) fn render_value(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() <= MAX_RENDERED_VALUE {
        return rendered;
    }
    let head: String = rendered.chars().take(MAX_RENDERED_VALUE).collect();
    format!("{head}...")
}

/// Read-only view over a raw JSON object.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    /// Wrap raw input, which must be a JSON object.
    pub fn new(raw: &'a Value) -> Result<Self> {
        match raw {
            Value::Object(map) => Ok(Self { map }),
            other => Err(ParamsError::MalformedInput(format!(
                "expected a JSON object, got {}",
                kind_of(other)
            ))),
        }
    }

    /// Raw value of a field, `None` when absent or null.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    /// Keys carrying a non-null value, in map order.
    pub fn present_keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.map
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, _)| key.as_str())
    }

    pub fn string(&self, field: &str) -> Result<Option<&'a str>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(ParamsError::invalid(field, render_value(other), "string")),
        }
    }

    /// String that must not be blank when present (model names, samplers).
    pub fn identifier(&self, field: &str) -> Result<Option<String>> {
        match self.string(field)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Err(ParamsError::invalid(
                field,
                render_value(&Value::from(s)),
                "non-empty string",
            )),
            Some(s) => Ok(Some(s.to_string())),
        }
    }

    /// Required string; absent or blank values are reported as missing.
    pub fn required_string(&self, field: &str) -> Result<&'a str> {
        match self.string(field)? {
            Some(s) if !s.trim().is_empty() => Ok(s),
            _ => Err(ParamsError::missing(field)),
        }
    }

    /// Non-negative integer no smaller than `min`.
    pub fn integer(&self, field: &str, min: u32) -> Result<Option<u32>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n >= min)
            .map(Some)
            .ok_or_else(|| {
                ParamsError::invalid(field, render_value(value), format!("integer >= {min}"))
            })
    }

    /// Signed integer.
    pub fn signed(&self, field: &str) -> Result<Option<i64>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        value
            .as_i64()
            .map(Some)
            .ok_or_else(|| ParamsError::invalid(field, render_value(value), "integer"))
    }

    pub fn number(&self, field: &str, domain: NumberDomain) -> Result<Option<f64>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        value
            .as_f64()
            .filter(|n| domain.contains(*n))
            .map(Some)
            .ok_or_else(|| ParamsError::invalid(field, render_value(value), domain.describe()))
    }

    pub fn boolean(&self, field: &str) -> Result<Option<bool>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(ParamsError::invalid(field, render_value(other), "boolean")),
        }
    }

    /// Integer code looked up through `from_code`.
    pub fn coded<T>(
        &self,
        field: &str,
        from_code: fn(u64) -> Option<T>,
        domain: &str,
    ) -> Result<Option<T>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        value
            .as_u64()
            .and_then(from_code)
            .map(Some)
            .ok_or_else(|| ParamsError::invalid(field, render_value(value), domain))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
