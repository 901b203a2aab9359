//! Error handling types for prodia-params.
//!
//! Every error here is detected locally, before any network call, and describes
//! an input the caller has to fix.

mod conversions;
pub mod types;

pub use types::*;
