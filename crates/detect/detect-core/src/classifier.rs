//! Anomaly classification against weak/strong thresholds.

use detect_spi::{AnomalyLevel, AnomalyThresholds, TailType};

/// Maps an observed value and a set of thresholds to an anomaly level,
/// applying the configured tail type. Bound comparisons are inclusive;
/// strong bounds are checked before weak, and for two-tailed tests the
/// upper side before the lower.
#[derive(Debug, Clone, Copy)]
pub struct AnomalyClassifier {
    tail: TailType,
}

impl AnomalyClassifier {
    pub fn new(tail: TailType) -> Self {
        Self { tail }
    }

    pub fn tail(&self) -> TailType {
        self.tail
    }

    pub fn classify(&self, thresholds: &AnomalyThresholds, value: f64) -> AnomalyLevel {
        match self.tail {
            TailType::LeftTailed => classify_lower(thresholds, value),
            TailType::RightTailed => classify_upper(thresholds, value),
            TailType::TwoTailed => {
                let upper = classify_upper(thresholds, value);
                let lower = classify_lower(thresholds, value);
                if upper == AnomalyLevel::Strong || lower == AnomalyLevel::Strong {
                    AnomalyLevel::Strong
                } else if upper == AnomalyLevel::Weak || lower == AnomalyLevel::Weak {
                    AnomalyLevel::Weak
                } else {
                    AnomalyLevel::Normal
                }
            }
        }
    }

    /// Legacy exclusive-bound classification.
    ///
    /// Retained for detectors calibrated against strict comparisons; this
    /// is a separate code path from [`classify`](Self::classify), not a
    /// parameter of it. Always two-sided, upper bounds before lower.
    pub fn classify_exclusive_bounds(
        thresholds: &AnomalyThresholds,
        value: f64,
    ) -> AnomalyLevel {
        if matches!(thresholds.upper_strong(), Some(bound) if value > bound) {
            AnomalyLevel::Strong
        } else if matches!(thresholds.upper_weak(), Some(bound) if value > bound) {
            AnomalyLevel::Weak
        } else if matches!(thresholds.lower_strong(), Some(bound) if value < bound) {
            AnomalyLevel::Strong
        } else if matches!(thresholds.lower_weak(), Some(bound) if value < bound) {
            AnomalyLevel::Weak
        } else {
            AnomalyLevel::Normal
        }
    }
}

fn classify_upper(thresholds: &AnomalyThresholds, value: f64) -> AnomalyLevel {
    if matches!(thresholds.upper_strong(), Some(bound) if value >= bound) {
        AnomalyLevel::Strong
    } else if matches!(thresholds.upper_weak(), Some(bound) if value >= bound) {
        AnomalyLevel::Weak
    } else {
        AnomalyLevel::Normal
    }
}

fn classify_lower(thresholds: &AnomalyThresholds, value: f64) -> AnomalyLevel {
    if matches!(thresholds.lower_strong(), Some(bound) if value <= bound) {
        AnomalyLevel::Strong
    } else if matches!(thresholds.lower_weak(), Some(bound) if value <= bound) {
        AnomalyLevel::Weak
    } else {
        AnomalyLevel::Normal
    }
}
