//! Data types for requests to the image generation service.
//!
//! ## Module Organization
//!
//! - **`style`** - `StylePreset` tags
//! - **`modes`** - integer-coded enums (`InpaintingFill`, `MaskInvert`, `ControlMode`)
//! - **`source`** - `ImageReference` / `MaskReference`
//! - **`sampling`**, **`inpainting`**, **`controlnet`** - field groups composed per operation
//! - **`request`** - canonical records, one per operation, and the `GenerationRequest` sum type
//!
//! Everything is re-exported from here.

pub mod controlnet;
pub mod inpainting;
pub mod modes;
pub mod request;
pub mod sampling;
pub mod source;
pub mod style;

pub use controlnet::*;
pub use inpainting::*;
pub use modes::*;
pub use request::*;
pub use sampling::*;
pub use source::*;
pub use style::*;
