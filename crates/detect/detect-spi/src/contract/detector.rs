//! Detector trait definition.

use crate::error::Result;
use crate::model::{DetectorResult, MetricPoint};

/// Online anomaly detector.
///
/// Implementations hold the running state for a single metric series and
/// classify one point at a time. The caller must deliver points for a
/// series in increasing timestamp order and never concurrently; this
/// single-writer precondition is not enforced internally.
pub trait Detector: Send {
    /// Classify a single observation and fold it into the running state.
    ///
    /// A non-finite observed value is a caller-contract violation and is
    /// rejected before any state mutation.
    fn classify(&mut self, point: &MetricPoint) -> Result<DetectorResult>;

    /// Short algorithm name, e.g. `"ewma"`.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DetectError;
    use crate::model::{AnomalyLevel, OutlierResult};

    /// Mock detector that flags values above a fixed cutoff.
    struct CutoffDetector {
        cutoff: f64,
        seen: usize,
    }

    impl Detector for CutoffDetector {
        fn classify(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
            if !point.value().is_finite() {
                return Err(DetectError::InvalidData(
                    "observed value must be finite".to_string(),
                ));
            }
            self.seen += 1;
            let level = if point.value() > self.cutoff {
                AnomalyLevel::Strong
            } else {
                AnomalyLevel::Normal
            };
            Ok(DetectorResult::Outlier(OutlierResult::new(level)))
        }

        fn name(&self) -> &str {
            "cutoff"
        }
    }

    #[test]
    fn test_classify_updates_state() {
        let mut detector = CutoffDetector {
            cutoff: 10.0,
            seen: 0,
        };
        let point = MetricPoint::new("m", 5.0, 0);

        let result = detector.classify(&point).unwrap();

        assert_eq!(result.level(), AnomalyLevel::Normal);
        assert_eq!(detector.seen, 1);
    }

    #[test]
    fn test_classify_rejects_non_finite_without_mutation() {
        let mut detector = CutoffDetector {
            cutoff: 10.0,
            seen: 0,
        };
        let point = MetricPoint::new("m", f64::NAN, 0);

        let result = detector.classify(&point);

        assert!(matches!(result, Err(DetectError::InvalidData(_))));
        assert_eq!(detector.seen, 0);
    }

    #[test]
    fn test_detector_as_trait_object() {
        let mut detector: Box<dyn Detector> = Box::new(CutoffDetector {
            cutoff: 1.0,
            seen: 0,
        });

        let result = detector
            .classify(&MetricPoint::new("m", 2.0, 0))
            .unwrap();

        assert_eq!(result.level(), AnomalyLevel::Strong);
        assert_eq!(detector.name(), "cutoff");
    }
}
