//! Interval forecaster trait definition.

use crate::error::Result;
use crate::model::{IntervalForecast, MetricPoint};

/// Converts a point forecast into weak and strong bands.
///
/// All four bands are always populated and are symmetric around the point
/// forecast. Implementations may keep running state of their own (the
/// exponential-Welford forecaster maintains a variance estimate).
pub trait IntervalForecaster: Send {
    /// Produce the bands around `point_forecast` for this observation.
    fn forecast(&mut self, point: &MetricPoint, point_forecast: f64) -> Result<IntervalForecast>;
}
