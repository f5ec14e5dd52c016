//! Interval forecaster configurations.

use serde::{Deserialize, Serialize};

use crate::{require, Result};

/// Additive interval forecaster: fixed offsets around the point forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditiveIntervalConfig {
    pub weak_value: f64,
    pub strong_value: f64,
}

impl AdditiveIntervalConfig {
    pub fn new(weak_value: f64, strong_value: f64) -> Self {
        Self {
            weak_value,
            strong_value,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(self.weak_value >= 0.0, "weak_value", "must be >= 0")?;
        require(
            self.strong_value >= self.weak_value,
            "strong_value",
            "must be >= weak_value",
        )
    }
}

/// Multiplicative interval forecaster: offsets scale with the point
/// forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplicativeIntervalConfig {
    pub weak_multiplier: f64,
    pub strong_multiplier: f64,
}

impl MultiplicativeIntervalConfig {
    pub fn new(weak_multiplier: f64, strong_multiplier: f64) -> Self {
        Self {
            weak_multiplier,
            strong_multiplier,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(self.weak_multiplier >= 0.0, "weak_multiplier", "must be >= 0")?;
        require(
            self.strong_multiplier >= self.weak_multiplier,
            "strong_multiplier",
            "must be >= weak_multiplier",
        )
    }
}

/// Power-law interval forecaster: band width grows as
/// `alpha * forecast^beta`, modeling noise that scales with the signal
/// level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerLawIntervalConfig {
    pub alpha: f64,
    pub beta: f64,
    pub weak_multiplier: f64,
    pub strong_multiplier: f64,
}

impl PowerLawIntervalConfig {
    pub fn validate(&self) -> Result<()> {
        require(self.alpha >= 0.0, "alpha", "must be >= 0")?;
        require(self.beta >= 0.0, "beta", "must be >= 0")?;
        require(self.weak_multiplier >= 0.0, "weak_multiplier", "must be >= 0")?;
        require(
            self.strong_multiplier >= self.weak_multiplier,
            "strong_multiplier",
            "must be >= weak_multiplier",
        )
    }
}

/// Exponentially weighted Welford interval forecaster: keeps an online
/// variance estimate and sets bands at `sigmas * sqrt(variance)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelfordIntervalConfig {
    pub alpha: f64,
    pub init_variance_estimate: f64,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
}

impl Default for WelfordIntervalConfig {
    fn default() -> Self {
        Self {
            alpha: 0.15,
            init_variance_estimate: 0.0,
            weak_sigmas: 3.0,
            strong_sigmas: 4.0,
        }
    }
}

impl WelfordIntervalConfig {
    pub fn validate(&self) -> Result<()> {
        require(
            (0.0..=1.0).contains(&self.alpha),
            "alpha",
            "must be in the range [0, 1]",
        )?;
        require(
            self.init_variance_estimate >= 0.0,
            "init_variance_estimate",
            "must be >= 0",
        )?;
        require(self.weak_sigmas > 0.0, "weak_sigmas", "must be > 0")?;
        require(
            self.strong_sigmas >= self.weak_sigmas,
            "strong_sigmas",
            "must be >= weak_sigmas",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_validation() {
        AdditiveIntervalConfig::new(10.0, 20.0).validate().unwrap();
        assert!(AdditiveIntervalConfig::new(-1.0, 20.0).validate().is_err());
        assert!(AdditiveIntervalConfig::new(20.0, 10.0).validate().is_err());
    }

    #[test]
    fn test_multiplicative_validation() {
        MultiplicativeIntervalConfig::new(0.1, 0.2)
            .validate()
            .unwrap();
        assert!(MultiplicativeIntervalConfig::new(0.3, 0.2)
            .validate()
            .is_err());
    }

    #[test]
    fn test_power_law_validation() {
        let config = PowerLawIntervalConfig {
            alpha: 0.5,
            beta: 0.85,
            weak_multiplier: 3.0,
            strong_multiplier: 4.0,
        };
        config.validate().unwrap();

        let negative_alpha = PowerLawIntervalConfig {
            alpha: -0.15,
            ..config.clone()
        };
        assert!(negative_alpha.validate().is_err());

        let negative_beta = PowerLawIntervalConfig {
            beta: -0.85,
            ..config.clone()
        };
        assert!(negative_beta.validate().is_err());

        let inverted_multipliers = PowerLawIntervalConfig {
            weak_multiplier: 3.0,
            strong_multiplier: 2.0,
            ..config
        };
        assert!(inverted_multipliers.validate().is_err());
    }

    #[test]
    fn test_welford_defaults_validate() {
        WelfordIntervalConfig::default().validate().unwrap();
    }

    #[test]
    fn test_welford_rejects_negative_variance() {
        let config = WelfordIntervalConfig {
            init_variance_estimate: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
