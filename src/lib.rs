//! prodia-params
//!
//! Request parameter contracts for the Prodia image generation API: generate,
//! transform (img2img), inpaint and ControlNet for SD and SDXL models, plus
//! upscale, face swap and face restore.
//!
//! Raw caller input flows through a [`Validator`], which checks required
//! fields, resolves image/mask sources, enforces value domains and applies the
//! per-operation default table. The resulting [`GenerationRequest`] is handed
//! to a [`RequestTransformer`], which produces the route and JSON body for the
//! transport layer. HTTP, authentication and retries are not part of this crate.
//!
//! ```rust,ignore
//! use prodia_params::{Operation, build, validate};
//! use serde_json::json;
//!
//! let request = validate(Operation::Generate, &json!({"prompt": "a red fox"}))?;
//! let wire = build(request)?;
//! assert_eq!(wire.route, "/sd/generate");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod operation;
pub mod params;
pub mod transformers;
pub mod types;

pub use config::ValidatorConfig;
pub use defaults::OperationDefaults;
pub use error::{ParamsError, Result};
pub use operation::{ModelFamily, Operation};
pub use params::{
    ParamsBuilder, Validator, resolve_image_reference, resolve_mask_reference, validate,
};
pub use transformers::{ProdiaRequestTransformer, RequestTransformer, WireRequest, build};
pub use types::*;
