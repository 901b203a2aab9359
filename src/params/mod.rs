//! Parameter Management Module
//!
//! Handles reading, validation and normalization of raw request parameters.
//!
//! - **`reader`** - typed, non-coercing access to raw JSON input
//! - **`source`** - image/mask source resolution (`imageUrl` xor `imageData`)
//! - **`validator`** - per-operation validation producing canonical records
//! - **`builder`** - `ParamsBuilder`, typed setters for the raw map

pub mod builder;
pub mod reader;
pub mod source;
pub mod validator;

pub use builder::*;
pub use reader::{FieldReader, NumberDomain};
pub use source::{resolve_image_reference, resolve_mask_reference};
pub use validator::*;
