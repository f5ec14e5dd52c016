//! Self-contained outlier detector configurations.

use serde::{Deserialize, Serialize};

use crate::{require, AnomalyThresholds, Result, TailType};

/// Constant-threshold detector configuration: fixed, pre-validated
/// classification bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantThresholdConfig {
    pub tail: TailType,
    pub thresholds: AnomalyThresholds,
    /// Select the legacy exclusive-bound classification path instead of
    /// the inclusive one.
    #[serde(default)]
    pub exclusive_bounds: bool,
}

impl ConstantThresholdConfig {
    pub fn new(tail: TailType, thresholds: AnomalyThresholds) -> Self {
        Self {
            tail,
            thresholds,
            exclusive_bounds: false,
        }
    }
}

/// CUSUM detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CusumConfig {
    pub tail: TailType,
    /// Process target the cumulative sums are centered on.
    pub target_value: f64,
    /// Slack, in standard deviations, absorbed before a shift accrues.
    pub slack_param: f64,
    pub warm_up_period: usize,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    pub init_mean_estimate: f64,
}

impl Default for CusumConfig {
    fn default() -> Self {
        Self {
            tail: TailType::TwoTailed,
            target_value: 0.0,
            slack_param: 0.5,
            warm_up_period: 25,
            weak_sigmas: 3.0,
            strong_sigmas: 4.0,
            init_mean_estimate: 0.0,
        }
    }
}

impl CusumConfig {
    pub fn validate(&self) -> Result<()> {
        require(self.target_value.is_finite(), "target_value", "must be finite")?;
        require(self.slack_param >= 0.0, "slack_param", "must be >= 0")?;
        require(self.weak_sigmas > 0.0, "weak_sigmas", "must be > 0")?;
        require(
            self.strong_sigmas > self.weak_sigmas,
            "strong_sigmas",
            "must be > weak_sigmas",
        )?;
        require(
            self.init_mean_estimate.is_finite(),
            "init_mean_estimate",
            "must be finite",
        )
    }
}
