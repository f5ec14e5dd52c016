//! Holt-Winters configuration.

use serde::{Deserialize, Serialize};

use crate::{require, Result};

/// Whether the seasonal component combines additively or
/// multiplicatively with level and base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalityType {
    Multiplicative,
    Additive,
}

impl SeasonalityType {
    /// Identity value for uninitialized components: 1 for multiplicative
    /// seasonality, 0 for additive.
    pub fn identity(self) -> f64 {
        match self {
            SeasonalityType::Multiplicative => 1.0,
            SeasonalityType::Additive => 0.0,
        }
    }
}

/// How the initial level/base/seasonal components are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoltWintersTrainingMethod {
    /// Components start from the configured estimates (or identities).
    None,
    /// A training phase over the first `2 * frequency` observations
    /// estimates the initial components before the online recursion
    /// begins. No classifications are emitted during this phase.
    Simple,
}

/// Holt-Winters (triple exponential smoothing) detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoltWintersConfig {
    pub seasonality_type: SeasonalityType,
    /// Periodicity of the data, e.g. 24 for hourly samples with daily
    /// seasons, 7 for daily samples with weekly seasons.
    pub frequency: usize,
    /// Level smoothing parameter, in [0, 1].
    pub alpha: f64,
    /// Base (trend) smoothing parameter, in [0, 1].
    pub beta: f64,
    /// Seasonal smoothing parameter, in [0, 1].
    pub gamma: f64,
    /// Observations before the detector may emit classifications. With
    /// simple training this is raised to `2 * frequency` if configured
    /// lower.
    pub warm_up_period: usize,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    /// Initial level estimate; the seasonality identity when unset.
    /// Applies only with `HoltWintersTrainingMethod::None`.
    #[serde(default)]
    pub init_level_estimate: Option<f64>,
    /// Initial base estimate; the seasonality identity when unset.
    #[serde(default)]
    pub init_base_estimate: Option<f64>,
    /// Initial seasonal estimates: either empty or exactly `frequency`
    /// values.
    #[serde(default)]
    pub init_seasonal_estimates: Vec<f64>,
    pub init_training_method: HoltWintersTrainingMethod,
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        Self {
            seasonality_type: SeasonalityType::Multiplicative,
            frequency: 0,
            alpha: 0.15,
            beta: 0.15,
            gamma: 0.15,
            warm_up_period: 0,
            weak_sigmas: 3.0,
            strong_sigmas: 4.0,
            init_level_estimate: None,
            init_base_estimate: None,
            init_seasonal_estimates: Vec::new(),
            init_training_method: HoltWintersTrainingMethod::None,
        }
    }
}

impl HoltWintersConfig {
    pub fn validate(&self) -> Result<()> {
        require(self.frequency > 0, "frequency", "must be > 0")?;
        require(
            (0.0..=1.0).contains(&self.alpha),
            "alpha",
            "must be in the range [0, 1]",
        )?;
        require(
            (0.0..=1.0).contains(&self.beta),
            "beta",
            "must be in the range [0, 1]",
        )?;
        require(
            (0.0..=1.0).contains(&self.gamma),
            "gamma",
            "must be in the range [0, 1]",
        )?;
        require(self.weak_sigmas > 0.0, "weak_sigmas", "must be > 0")?;
        require(
            self.strong_sigmas > self.weak_sigmas,
            "strong_sigmas",
            "must be > weak_sigmas",
        )?;
        require(
            self.init_seasonal_estimates.is_empty()
                || self.init_seasonal_estimates.len() == self.frequency,
            "init_seasonal_estimates",
            "must be empty or contain exactly frequency values",
        )?;
        if self.seasonality_type == SeasonalityType::Multiplicative {
            require(
                self.init_seasonal_estimates.iter().all(|s| *s != 0.0),
                "init_seasonal_estimates",
                "must be nonzero for multiplicative seasonality",
            )?;
        }
        Ok(())
    }

    /// Length of the initial training phase in observations.
    pub fn init_training_period(&self) -> usize {
        match self.init_training_method {
            HoltWintersTrainingMethod::Simple => 2 * self.frequency,
            HoltWintersTrainingMethod::None => 0,
        }
    }
}
