//! Identity post-detection filter.

use crate::chain::{PostDetectionFilter, PostDetectionFilterChain};
use detect_spi::{DetectorResult, Result};

/// Forwards every result unchanged.
#[derive(Debug, Clone, Default)]
pub struct PassThroughPostFilter;

impl PassThroughPostFilter {
    pub fn new() -> Self {
        Self
    }
}

impl PostDetectionFilter for PassThroughPostFilter {
    fn do_filter(
        &mut self,
        result: DetectorResult,
        chain: &mut PostDetectionFilterChain<'_>,
    ) -> Result<DetectorResult> {
        chain.do_filter(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detect_spi::{AnomalyLevel, OutlierResult};

    #[test]
    fn test_identity() {
        let mut filter = PassThroughPostFilter::new();
        let result = DetectorResult::Outlier(OutlierResult::new(AnomalyLevel::Weak));

        let mut rest: Vec<Box<dyn PostDetectionFilter>> = Vec::new();
        let mut chain = PostDetectionFilterChain::new(&mut rest);
        let out = filter.do_filter(result.clone(), &mut chain).unwrap();

        assert_eq!(out, result);
    }
}
