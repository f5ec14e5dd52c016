//! Detection filter chains.

use detect_spi::{Detector, DetectorResult, MetricPoint, Result};

/// Pre-detection filter: sees the point before the detector does.
///
/// A filter either forwards the point down the chain (possibly having
/// recorded something), or vetoes by returning a result of its own
/// without calling the continuation.
pub trait DetectionFilter: Send {
    fn do_filter(
        &mut self,
        point: &MetricPoint,
        chain: &mut DetectionFilterChain<'_>,
    ) -> Result<DetectorResult>;
}

/// Post-detection filter: sees the detector's result on its way out and
/// may transform it.
pub trait PostDetectionFilter: Send {
    fn do_filter(
        &mut self,
        result: DetectorResult,
        chain: &mut PostDetectionFilterChain<'_>,
    ) -> Result<DetectorResult>;
}

/// Continuation over the remaining pre-detection filters, ending at the
/// detector.
pub struct DetectionFilterChain<'a> {
    filters: &'a mut [Box<dyn DetectionFilter>],
    detector: &'a mut dyn Detector,
}

impl<'a> DetectionFilterChain<'a> {
    pub fn new(filters: &'a mut [Box<dyn DetectionFilter>], detector: &'a mut dyn Detector) -> Self {
        Self { filters, detector }
    }

    /// Invoke the next element of the chain: the head filter with the
    /// tail as its continuation, or the detector once no filters remain.
    pub fn do_filter(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        let filters = std::mem::take(&mut self.filters);
        match filters.split_first_mut() {
            Some((head, rest)) => {
                let mut next = DetectionFilterChain {
                    filters: rest,
                    detector: &mut *self.detector,
                };
                head.do_filter(point, &mut next)
            }
            None => self.detector.classify(point),
        }
    }
}

/// Continuation over the remaining post-detection filters.
pub struct PostDetectionFilterChain<'a> {
    filters: &'a mut [Box<dyn PostDetectionFilter>],
}

impl<'a> PostDetectionFilterChain<'a> {
    pub fn new(filters: &'a mut [Box<dyn PostDetectionFilter>]) -> Self {
        Self { filters }
    }

    /// Invoke the next post-filter, or return the result unchanged once
    /// no filters remain.
    pub fn do_filter(&mut self, result: DetectorResult) -> Result<DetectorResult> {
        let filters = std::mem::take(&mut self.filters);
        match filters.split_first_mut() {
            Some((head, rest)) => {
                let mut next = PostDetectionFilterChain { filters: rest };
                head.do_filter(result, &mut next)
            }
            None => Ok(result),
        }
    }
}

/// A detector wrapped in ordered pre- and post-detection filters.
///
/// Each point flows pre-filters -> detector -> post-filters; any
/// pre-filter may stop the flow and substitute its own result, in which
/// case the detector state is untouched and post-filters still run.
pub struct FilteredDetector {
    pre_filters: Vec<Box<dyn DetectionFilter>>,
    detector: Box<dyn Detector>,
    post_filters: Vec<Box<dyn PostDetectionFilter>>,
}

impl FilteredDetector {
    pub fn new(
        pre_filters: Vec<Box<dyn DetectionFilter>>,
        detector: Box<dyn Detector>,
        post_filters: Vec<Box<dyn PostDetectionFilter>>,
    ) -> Self {
        Self {
            pre_filters,
            detector,
            post_filters,
        }
    }

    /// Wrap a detector with no filters.
    pub fn bare(detector: Box<dyn Detector>) -> Self {
        Self::new(Vec::new(), detector, Vec::new())
    }

    pub fn detector_name(&self) -> &str {
        self.detector.name()
    }

    pub fn classify(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        let mut chain =
            DetectionFilterChain::new(&mut self.pre_filters, self.detector.as_mut());
        let result = chain.do_filter(point)?;

        let mut post_chain = PostDetectionFilterChain::new(&mut self.post_filters);
        post_chain.do_filter(result)
    }
}
