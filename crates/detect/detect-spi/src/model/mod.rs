//! Shared model types for the detection engine.

mod anomaly_level;
mod anomaly_thresholds;
mod detector_result;
mod forecasts;
mod metric_point;
mod tail_type;

pub use anomaly_level::AnomalyLevel;
pub use anomaly_thresholds::AnomalyThresholds;
pub use detector_result::{BreakoutEstimate, BreakoutResult, DetectorResult, OutlierResult};
pub use forecasts::{IntervalForecast, PointForecast};
pub use metric_point::MetricPoint;
pub use tail_type::TailType;
