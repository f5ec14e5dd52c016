//! Error types for the detection engine.

mod detect_error;

pub use detect_error::{DetectError, Result};
