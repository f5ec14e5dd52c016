//! EDM-X breakout detector configuration.

use serde::{Deserialize, Serialize};

use crate::{require, Result};

/// EDM-X hyperparameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdmxConfig {
    /// Minimum sample size on either side of a candidate split.
    pub delta: usize,
    /// Size of the sliding evaluation buffer.
    pub buffer_size: usize,
    /// Number of permutations for the significance test.
    pub num_perms: usize,
    /// Significance level for a strong breakout.
    pub strong_alpha: f64,
    /// Significance level for a weak breakout.
    pub weak_alpha: f64,
    /// Seed for the permutation shuffle. A set seed makes p-values
    /// reproducible on identical input; unset falls back to entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EdmxConfig {
    fn default() -> Self {
        Self {
            delta: 6,
            buffer_size: 32,
            num_perms: 199,
            strong_alpha: 0.01,
            weak_alpha: 0.05,
            seed: None,
        }
    }
}

impl EdmxConfig {
    pub fn validate(&self) -> Result<()> {
        require(self.delta > 0, "delta", "must be > 0")?;
        require(
            self.buffer_size >= 2 * self.delta,
            "buffer_size",
            "must be >= 2 * delta",
        )?;
        require(
            (0.0..=1.0).contains(&self.strong_alpha),
            "strong_alpha",
            "must be in the range [0, 1]",
        )?;
        require(
            (0.0..=1.0).contains(&self.weak_alpha),
            "weak_alpha",
            "must be in the range [0, 1]",
        )?;
        require(
            self.strong_alpha <= self.weak_alpha,
            "strong_alpha",
            "must be <= weak_alpha",
        )
    }
}
