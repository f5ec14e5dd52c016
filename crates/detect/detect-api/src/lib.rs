//! Detection API
//!
//! Configuration types for the detection engine. Every config is
//! serde-serializable and validated at construction time by the component
//! that consumes it; `validate()` never leaves a half-checked config in
//! play.

mod breakout;
mod filter;
mod holt_winters;
mod interval;
mod outlier;
mod point;

pub use breakout::EdmxConfig;
pub use filter::{HourOfDayConfig, MOfNConfig};
pub use holt_winters::{HoltWintersConfig, HoltWintersTrainingMethod, SeasonalityType};
pub use interval::{
    AdditiveIntervalConfig, MultiplicativeIntervalConfig, PowerLawIntervalConfig,
    WelfordIntervalConfig,
};
pub use outlier::{ConstantThresholdConfig, CusumConfig};
pub use point::{EwmaConfig, PewmaConfig, SeasonalNaiveConfig, SmaConfig};

// Re-export SPI types commonly needed alongside configs
pub use detect_spi::{AnomalyThresholds, DetectError, Result, TailType};

/// Validation helper shared by the config types.
pub(crate) fn require(condition: bool, name: &str, reason: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(DetectError::invalid_parameter(name, reason))
    }
}
