//! Weak and strong thresholds to support one- and two-tailed tests.

use serde::{Deserialize, Serialize};

use crate::error::{DetectError, Result};

/// Weak and strong classification bounds.
///
/// At least one bound must be set, and whenever two bounds are both
/// present they must satisfy
/// `upper_strong >= upper_weak >= lower_weak >= lower_strong`.
/// Construction rejects any violation, so a value of this type is always
/// well ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct AnomalyThresholds {
    upper_strong: Option<f64>,
    upper_weak: Option<f64>,
    lower_weak: Option<f64>,
    lower_strong: Option<f64>,
}

impl AnomalyThresholds {
    pub fn new(
        upper_strong: Option<f64>,
        upper_weak: Option<f64>,
        lower_weak: Option<f64>,
        lower_strong: Option<f64>,
    ) -> Result<Self> {
        if upper_strong.is_none()
            && upper_weak.is_none()
            && lower_weak.is_none()
            && lower_strong.is_none()
        {
            return Err(DetectError::InvalidThresholds(
                "at least one threshold must be set".to_string(),
            ));
        }

        let ordered_pairs = [
            (upper_strong, upper_weak, "upper_strong", "upper_weak"),
            (upper_strong, lower_weak, "upper_strong", "lower_weak"),
            (upper_strong, lower_strong, "upper_strong", "lower_strong"),
            (upper_weak, lower_weak, "upper_weak", "lower_weak"),
            (upper_weak, lower_strong, "upper_weak", "lower_strong"),
            (lower_weak, lower_strong, "lower_weak", "lower_strong"),
        ];
        for (hi, lo, hi_name, lo_name) in ordered_pairs {
            if let (Some(hi), Some(lo)) = (hi, lo) {
                if !(hi >= lo) {
                    return Err(DetectError::InvalidThresholds(format!(
                        "Required: {hi_name} ({hi}) >= {lo_name} ({lo})"
                    )));
                }
            }
        }

        Ok(Self {
            upper_strong,
            upper_weak,
            lower_weak,
            lower_strong,
        })
    }

    /// Build a fully populated band around `center`.
    pub fn band(center: f64, weak_delta: f64, strong_delta: f64) -> Result<Self> {
        Self::new(
            Some(center + strong_delta),
            Some(center + weak_delta),
            Some(center - weak_delta),
            Some(center - strong_delta),
        )
    }

    pub fn upper_strong(&self) -> Option<f64> {
        self.upper_strong
    }

    pub fn upper_weak(&self) -> Option<f64> {
        self.upper_weak
    }

    pub fn lower_weak(&self) -> Option<f64> {
        self.lower_weak
    }

    pub fn lower_strong(&self) -> Option<f64> {
        self.lower_strong
    }
}

/// Unvalidated mirror used to funnel deserialization through `new`.
#[derive(Deserialize)]
struct RawThresholds {
    upper_strong: Option<f64>,
    upper_weak: Option<f64>,
    lower_weak: Option<f64>,
    lower_strong: Option<f64>,
}

impl TryFrom<RawThresholds> for AnomalyThresholds {
    type Error = DetectError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        AnomalyThresholds::new(
            raw.upper_strong,
            raw.upper_weak,
            raw.lower_weak,
            raw.lower_strong,
        )
    }
}
