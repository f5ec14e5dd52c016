//! Point and interval forecast value types.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::AnomalyThresholds;

/// One-step-ahead point forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointForecast {
    value: f64,
    warmup: bool,
}

impl PointForecast {
    pub fn new(value: f64, warmup: bool) -> Self {
        Self { value, warmup }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the forecaster is still accumulating initial state.
    pub fn warmup(&self) -> bool {
        self.warmup
    }
}

/// Weak and strong bands around a point forecast. All four bands are
/// always populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalForecast {
    upper_strong: f64,
    upper_weak: f64,
    lower_weak: f64,
    lower_strong: f64,
}

impl IntervalForecast {
    pub fn new(upper_strong: f64, upper_weak: f64, lower_weak: f64, lower_strong: f64) -> Self {
        Self {
            upper_strong,
            upper_weak,
            lower_weak,
            lower_strong,
        }
    }

    pub fn upper_strong(&self) -> f64 {
        self.upper_strong
    }

    pub fn upper_weak(&self) -> f64 {
        self.upper_weak
    }

    pub fn lower_weak(&self) -> f64 {
        self.lower_weak
    }

    pub fn lower_strong(&self) -> f64 {
        self.lower_strong
    }

    /// Convert to classification thresholds, enforcing band ordering.
    pub fn to_thresholds(&self) -> Result<AnomalyThresholds> {
        AnomalyThresholds::new(
            Some(self.upper_strong),
            Some(self.upper_weak),
            Some(self.lower_weak),
            Some(self.lower_strong),
        )
    }
}
