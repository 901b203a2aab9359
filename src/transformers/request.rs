//! Request transformation
//!
//! Converts canonical request records into the route and JSON body the
//! service expects. This is the seam to the transport layer; sending the
//! body, authentication and retries live outside this crate.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ParamsError, Result};
use crate::types::GenerationRequest;

/// Transport-ready request: where to post, and what.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireRequest {
    /// Route relative to the API base URL (e.g. `/sd/generate`)
    pub route: &'static str,
    /// JSON body. Keys keep the service's mixed casing: snake_case
    /// generation parameters, camelCase image/mask/face source fields.
    pub body: Map<String, Value>,
}

impl WireRequest {
    /// Serialized body. Identical records always give identical bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.body).map_err(|err| ParamsError::Serialization(err.to_string()))
    }
}

/// Transform canonical records into provider-specific payloads
pub trait RequestTransformer: Send + Sync {
    /// Provider identifier
    fn provider_id(&self) -> &str;

    /// Consume a validated record and produce its wire request
    fn transform(&self, req: GenerationRequest) -> Result<WireRequest>;
}

/// Request transformer for the Prodia v1 API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProdiaRequestTransformer;

impl RequestTransformer for ProdiaRequestTransformer {
    fn provider_id(&self) -> &str {
        "prodia"
    }

    fn transform(&self, req: GenerationRequest) -> Result<WireRequest> {
        let route = req.operation().route();
        let value = serde_json::to_value(&req)
            .map_err(|err| ParamsError::Serialization(err.to_string()))?;
        match value {
            Value::Object(body) => {
                tracing::debug!(route, fields = body.len(), "built request body");
                Ok(WireRequest { route, body })
            }
            other => Err(body_not_an_object(route, &other)),
        }
    }
}

/// Every record is a struct, so this only fires if a record type changes shape.
fn body_not_an_object(route: &str, value: &Value) -> ParamsError {
    ParamsError::Serialization(format!(
        "request body for {route} is not a JSON object: {value}"
    ))
}

/// Build the wire request for a validated record with [`ProdiaRequestTransformer`].
pub fn build(req: GenerationRequest) -> Result<WireRequest> {
    ProdiaRequestTransformer.transform(req)
}
