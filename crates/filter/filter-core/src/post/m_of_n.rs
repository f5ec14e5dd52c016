//! M-of-N aggregation filter.

use crate::chain::{PostDetectionFilter, PostDetectionFilterChain};
use detect_api::MOfNConfig;
use detect_spi::{AnomalyLevel, DetectorResult, Result};

/// Escalates the outgoing anomaly level to strong when at least `m` of
/// the last `n` levels were weak or strong. The predicted value and
/// thresholds pass through untouched; only the level is rewritten.
///
/// Only outlier-shaped results participate; anything else bypasses the
/// aggregation unchanged.
#[derive(Debug, Clone)]
pub struct MOfNAggregationFilter {
    m: usize,
    buffer: Vec<Option<AnomalyLevel>>,
    index: usize,
}

impl MOfNAggregationFilter {
    pub fn new(config: &MOfNConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            m: config.m,
            buffer: vec![None; config.n],
            index: 0,
        })
    }

    fn record(&mut self, level: AnomalyLevel) {
        self.buffer[self.index] = Some(level);
        self.index = (self.index + 1) % self.buffer.len();
    }

    fn anomaly_count(&self) -> usize {
        self.buffer
            .iter()
            .filter(|slot| matches!(slot, Some(level) if level.is_anomalous()))
            .count()
    }
}

impl PostDetectionFilter for MOfNAggregationFilter {
    fn do_filter(
        &mut self,
        result: DetectorResult,
        chain: &mut PostDetectionFilterChain<'_>,
    ) -> Result<DetectorResult> {
        match result {
            DetectorResult::Outlier(mut outlier) => {
                self.record(outlier.level);
                if self.anomaly_count() >= self.m {
                    outlier.level = AnomalyLevel::Strong;
                }
                chain.do_filter(DetectorResult::Outlier(outlier))
            }
            other => {
                tracing::warn!(
                    "m-of-n aggregation only applies to outlier results; skipping aggregation"
                );
                chain.do_filter(other)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detect_spi::{AnomalyThresholds, BreakoutResult, OutlierResult};

    fn filter(m: usize, n: usize) -> MOfNAggregationFilter {
        MOfNAggregationFilter::new(&MOfNConfig::new(m, n)).unwrap()
    }

    fn terminal(
        filter: &mut MOfNAggregationFilter,
        result: DetectorResult,
    ) -> DetectorResult {
        let mut rest: Vec<Box<dyn PostDetectionFilter>> = Vec::new();
        let mut chain = PostDetectionFilterChain::new(&mut rest);
        filter.do_filter(result, &mut chain).unwrap()
    }

    fn run(filter: &mut MOfNAggregationFilter, level: AnomalyLevel) -> DetectorResult {
        terminal(filter, DetectorResult::Outlier(OutlierResult::new(level)))
    }

    #[test]
    fn test_three_of_five_escalates_on_third_weak() {
        let mut filter = filter(3, 5);

        assert_eq!(run(&mut filter, AnomalyLevel::Weak).level(), AnomalyLevel::Weak);
        assert_eq!(run(&mut filter, AnomalyLevel::Weak).level(), AnomalyLevel::Weak);
        assert_eq!(
            run(&mut filter, AnomalyLevel::Weak).level(),
            AnomalyLevel::Strong
        );
    }

    #[test]
    fn test_normals_do_not_accumulate() {
        let mut filter = filter(2, 3);

        for _ in 0..5 {
            assert_eq!(
                run(&mut filter, AnomalyLevel::Normal).level(),
                AnomalyLevel::Normal
            );
        }
    }

    #[test]
    fn test_window_forgets_old_anomalies() {
        let mut filter = filter(2, 3);

        assert_eq!(run(&mut filter, AnomalyLevel::Weak).level(), AnomalyLevel::Weak);
        // Two normals push the weak toward the edge of the window.
        run(&mut filter, AnomalyLevel::Normal);
        run(&mut filter, AnomalyLevel::Normal);
        // The weak has rolled out of the window, so this one stands alone.
        assert_eq!(run(&mut filter, AnomalyLevel::Weak).level(), AnomalyLevel::Weak);
    }

    #[test]
    fn test_mixed_weak_and_strong_count_together() {
        let mut filter = filter(2, 4);

        assert_eq!(
            run(&mut filter, AnomalyLevel::Strong).level(),
            AnomalyLevel::Strong
        );
        assert_eq!(
            run(&mut filter, AnomalyLevel::Weak).level(),
            AnomalyLevel::Strong
        );
    }

    #[test]
    fn test_predicted_and_thresholds_pass_through() {
        let mut filter = filter(1, 2);
        let thresholds = AnomalyThresholds::band(10.0, 1.0, 2.0).unwrap();
        let result = DetectorResult::Outlier(
            OutlierResult::new(AnomalyLevel::Weak)
                .with_predicted(10.0)
                .with_thresholds(thresholds.clone()),
        );

        let aggregated = terminal(&mut filter, result);

        match aggregated {
            DetectorResult::Outlier(outlier) => {
                assert_eq!(outlier.level, AnomalyLevel::Strong);
                assert_eq!(outlier.predicted, Some(10.0));
                assert_eq!(outlier.thresholds, Some(thresholds));
            }
            other => panic!("expected outlier result, got {other:?}"),
        }
    }

    #[test]
    fn test_breakout_results_bypass_aggregation() {
        let mut filter = filter(1, 1);
        let result = DetectorResult::Breakout(BreakoutResult::quiet());

        let out = terminal(&mut filter, result.clone());

        assert_eq!(out, result);
        assert_eq!(filter.anomaly_count(), 0);
    }
}
