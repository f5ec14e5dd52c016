//! Detector result types.

use serde::{Deserialize, Serialize};

use crate::model::{AnomalyLevel, AnomalyThresholds};

/// Result of classifying a single point, tagged by detector family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetectorResult {
    /// Outlier classification: a level plus the prediction and thresholds
    /// it was judged against.
    Outlier(OutlierResult),
    /// Breakout (change-point) detection over a sliding buffer.
    Breakout(BreakoutResult),
}

impl DetectorResult {
    pub fn level(&self) -> AnomalyLevel {
        match self {
            DetectorResult::Outlier(result) => result.level,
            DetectorResult::Breakout(result) => result.level,
        }
    }

    pub fn is_warmup(&self) -> bool {
        match self {
            DetectorResult::Outlier(result) => result.level == AnomalyLevel::ModelWarmup,
            DetectorResult::Breakout(result) => result.warmup,
        }
    }
}

/// Outlier detector verdict for one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierResult {
    pub level: AnomalyLevel,
    pub predicted: Option<f64>,
    pub thresholds: Option<AnomalyThresholds>,
}

impl OutlierResult {
    pub fn new(level: AnomalyLevel) -> Self {
        Self {
            level,
            predicted: None,
            thresholds: None,
        }
    }

    /// Result reported while a detector is still warming up: no
    /// prediction, no thresholds.
    pub fn warmup() -> Self {
        Self::new(AnomalyLevel::ModelWarmup)
    }

    /// Empty normal result, used when a filter vetoes detection.
    pub fn empty() -> Self {
        Self::new(AnomalyLevel::Normal)
    }

    pub fn with_predicted(mut self, predicted: f64) -> Self {
        self.predicted = Some(predicted);
        self
    }

    pub fn with_thresholds(mut self, thresholds: AnomalyThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }
}

/// Breakout detector verdict for one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakoutResult {
    /// True while the sliding buffer is still filling.
    pub warmup: bool,
    /// Timestamp (epoch seconds) of the buffered point at the estimated
    /// breakout location.
    pub timestamp: Option<i64>,
    pub estimate: Option<BreakoutEstimate>,
    pub level: AnomalyLevel,
}

impl BreakoutResult {
    pub fn warming_up() -> Self {
        Self {
            warmup: true,
            timestamp: None,
            estimate: None,
            level: AnomalyLevel::ModelWarmup,
        }
    }

    /// Full buffer, but no candidate breakout location.
    pub fn quiet() -> Self {
        Self {
            warmup: false,
            timestamp: None,
            estimate: None,
            level: AnomalyLevel::Normal,
        }
    }
}

/// Estimated breakout produced by one EDM-X evaluation. Immutable value
/// object created fresh per evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakoutEstimate {
    /// Index of the estimated breakout in the evaluated buffer, `None`
    /// when no candidate split produced a positive statistic.
    pub location: Option<usize>,
    /// Energy distance between the pre- and post-breakout samples.
    pub energy_distance: f64,
    /// Median of the pre-breakout sample (unit-scaled data).
    pub pre_breakout_median: f64,
    /// Median of the post-breakout sample (unit-scaled data).
    pub post_breakout_median: f64,
    /// Estimated p-value from the permutation test.
    pub p_value: f64,
    /// Significance level the estimate was tested against.
    pub alpha: f64,
    /// Whether `p_value <= alpha`.
    pub significant: bool,
}

impl BreakoutEstimate {
    pub fn new(
        location: Option<usize>,
        energy_distance: f64,
        pre_breakout_median: f64,
        post_breakout_median: f64,
        p_value: f64,
        alpha: f64,
    ) -> Self {
        Self {
            location,
            energy_distance,
            pre_breakout_median,
            post_breakout_median,
            p_value,
            alpha,
            significant: p_value <= alpha,
        }
    }
}
