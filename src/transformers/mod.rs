//! Transformers layer
//!
//! Maps validated records onto the service's wire format.

pub mod request;

pub use request::*;
