//! Identity pre-detection filter.

use crate::chain::{DetectionFilter, DetectionFilterChain};
use detect_spi::{DetectorResult, MetricPoint, Result};

/// Forwards every point unchanged. Useful as a placeholder in configured
/// chains.
#[derive(Debug, Clone, Default)]
pub struct PassThroughFilter;

impl PassThroughFilter {
    pub fn new() -> Self {
        Self
    }
}

impl DetectionFilter for PassThroughFilter {
    fn do_filter(
        &mut self,
        point: &MetricPoint,
        chain: &mut DetectionFilterChain<'_>,
    ) -> Result<DetectorResult> {
        chain.do_filter(point)
    }
}
