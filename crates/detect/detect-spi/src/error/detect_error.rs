//! Detection error types
//!
//! Defines the standardized error type for all detection operations.

use thiserror::Error;

/// Result type alias for detection operations
pub type Result<T> = std::result::Result<T, DetectError>;

/// Errors that can occur during detection operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectError {
    /// Invalid parameter value, raised at construction time
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Threshold ordering or presence violation
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid input data (non-finite values, out-of-order timestamps)
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A fault occurred inside a detector's update step. The point is not
    /// retried and no default result is substituted; a skipped or
    /// fabricated point would corrupt the running state for all
    /// subsequent points.
    #[error("Classification failed in detector '{detector}': {source}")]
    ClassificationFailed {
        detector: String,
        #[source]
        source: Box<DetectError>,
    },
}

impl DetectError {
    /// Convenience constructor for parameter validation failures.
    pub fn invalid_parameter(name: &str, reason: &str) -> Self {
        DetectError::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
