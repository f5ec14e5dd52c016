//! Point forecaster configurations.

use serde::{Deserialize, Serialize};

use crate::{require, Result};

/// EWMA detector configuration.
///
/// `alpha` weights toward new data: despite the literature name
/// "smoothing parameter", larger values mean less smoothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EwmaConfig {
    pub alpha: f64,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    pub init_mean_estimate: f64,
}

impl Default for EwmaConfig {
    fn default() -> Self {
        Self {
            alpha: 0.15,
            weak_sigmas: 3.0,
            strong_sigmas: 4.0,
            init_mean_estimate: 0.0,
        }
    }
}

impl EwmaConfig {
    pub fn validate(&self) -> Result<()> {
        require(
            (0.0..=1.0).contains(&self.alpha),
            "alpha",
            "must be in the range [0, 1]",
        )?;
        require(self.weak_sigmas > 0.0, "weak_sigmas", "must be > 0")?;
        require(
            self.strong_sigmas >= self.weak_sigmas,
            "strong_sigmas",
            "must be >= weak_sigmas",
        )?;
        require(
            self.init_mean_estimate.is_finite(),
            "init_mean_estimate",
            "must be finite",
        )
    }
}

/// PEWMA detector configuration.
///
/// The probabilistic EWMA down-weights probable anomalies via `beta`;
/// during the first `warm_up_period` observations the forecaster behaves
/// as a plain running average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PewmaConfig {
    pub alpha: f64,
    pub beta: f64,
    pub warm_up_period: usize,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    pub init_mean_estimate: f64,
}

impl Default for PewmaConfig {
    fn default() -> Self {
        Self {
            alpha: 0.15,
            beta: 1.0,
            warm_up_period: 30,
            weak_sigmas: 3.0,
            strong_sigmas: 4.0,
            init_mean_estimate: 0.0,
        }
    }
}

impl PewmaConfig {
    pub fn validate(&self) -> Result<()> {
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
        require(self.weak_sigmas > 0.0, "weak_sigmas", "must be > 0")?;
        require(
            self.strong_sigmas >= self.weak_sigmas,
            "strong_sigmas",
            "must be >= weak_sigmas",
        )?;
        require(
            self.init_mean_estimate.is_finite(),
            "init_mean_estimate",
            "must be finite",
        )
    }
}

/// Simple moving average forecaster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaConfig {
    /// Number of recent observations the mean is taken over.
    pub look_back_period: usize,
    /// Optional seed window applied before any live observations.
    #[serde(default)]
    pub initial_values: Vec<f64>,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            look_back_period: 10,
            initial_values: Vec::new(),
        }
    }
}

impl SmaConfig {
    pub fn validate(&self) -> Result<()> {
        require(self.look_back_period > 0, "look_back_period", "must be > 0")?;
        require(
            self.initial_values.len() <= self.look_back_period,
            "initial_values",
            "must not exceed look_back_period",
        )?;
        require(
            self.initial_values.iter().all(|value| value.is_finite()),
            "initial_values",
            "must all be finite",
        )
    }
}

/// Seasonal naive forecaster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalNaiveConfig {
    /// Number of observations per cycle.
    pub cycle_length: usize,
    /// Seconds between two observations.
    pub interval_seconds: i64,
}

impl Default for SeasonalNaiveConfig {
    fn default() -> Self {
        Self {
            cycle_length: 2016,
            interval_seconds: 300,
        }
    }
}

impl SeasonalNaiveConfig {
    pub fn validate(&self) -> Result<()> {
        require(self.cycle_length > 0, "cycle_length", "must be > 0")?;
        require(self.interval_seconds > 0, "interval_seconds", "must be > 0")
    }
}
