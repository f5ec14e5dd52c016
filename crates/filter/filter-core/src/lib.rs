//! Filter Core
//!
//! Composable pre- and post-detection filters around a detector. Filters
//! are invoked in order with a continuation for the rest of the chain: a
//! pre-filter can gate a point away from the detector entirely, and a
//! post-filter can transform or aggregate the detector's result.

mod chain;
pub mod post;
pub mod pre;

pub use chain::{
    DetectionFilter, DetectionFilterChain, FilteredDetector, PostDetectionFilter,
    PostDetectionFilterChain,
};
pub use post::{MOfNAggregationFilter, PassThroughPostFilter};
pub use pre::{HourOfDayFilter, PassThroughFilter};
