//! Constant-threshold detector.

use crate::classifier::AnomalyClassifier;
use detect_api::ConstantThresholdConfig;
use detect_spi::{
    AnomalyThresholds, DetectError, Detector, DetectorResult, MetricPoint, OutlierResult, Result,
};

/// Detector that classifies each observation against fixed, configured
/// thresholds. No running state; useful for metrics with known bounds
/// (error rates, saturation percentages).
#[derive(Debug, Clone)]
pub struct ConstantThresholdDetector {
    classifier: AnomalyClassifier,
    thresholds: AnomalyThresholds,
    exclusive_bounds: bool,
}

impl ConstantThresholdDetector {
    pub const NAME: &'static str = "constant-threshold";

    pub fn new(config: &ConstantThresholdConfig) -> Self {
        Self {
            classifier: AnomalyClassifier::new(config.tail),
            thresholds: config.thresholds.clone(),
            exclusive_bounds: config.exclusive_bounds,
        }
    }

    pub fn thresholds(&self) -> &AnomalyThresholds {
        &self.thresholds
    }
}

impl Detector for ConstantThresholdDetector {
    fn classify(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        if !point.value().is_finite() {
            return Err(DetectError::InvalidData(
                "observed value must be finite".to_string(),
            ));
        }

        let level = if self.exclusive_bounds {
            AnomalyClassifier::classify_exclusive_bounds(&self.thresholds, point.value())
        } else {
            self.classifier.classify(&self.thresholds, point.value())
        };

        Ok(DetectorResult::Outlier(
            OutlierResult::new(level).with_thresholds(self.thresholds.clone()),
        ))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
