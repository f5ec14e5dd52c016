//! Exponentially weighted Welford interval forecaster.

use detect_api::WelfordIntervalConfig;
use detect_spi::{IntervalForecast, IntervalForecaster, MetricPoint, Result};

/// Interval forecaster based on Welford's online variance algorithm with
/// exponential weighting, the same recursion the EWMA mean uses:
///
/// ```text
/// residual = observed - point_forecast
/// incr     = alpha * residual
/// variance = (1 - alpha) * (variance + residual * incr)
/// ```
///
/// Bands sit at `sigmas * sqrt(variance)` around the point forecast and
/// are computed from the variance as estimated before the current
/// observation; the residual is folded in afterwards. A residual can
/// therefore never widen the bands it is judged against.
#[derive(Debug, Clone)]
pub struct ExponentialWelfordIntervalForecaster {
    alpha: f64,
    weak_sigmas: f64,
    strong_sigmas: f64,
    variance: f64,
}

impl ExponentialWelfordIntervalForecaster {
    pub fn new(config: &WelfordIntervalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alpha: config.alpha,
            weak_sigmas: config.weak_sigmas,
            strong_sigmas: config.strong_sigmas,
            variance: config.init_variance_estimate,
        })
    }

    /// Current variance estimate.
    pub fn variance(&self) -> f64 {
        self.variance
    }
}

impl IntervalForecaster for ExponentialWelfordIntervalForecaster {
    fn forecast(&mut self, point: &MetricPoint, point_forecast: f64) -> Result<IntervalForecast> {
        let std_dev = self.variance.sqrt();
        let weak_width = self.weak_sigmas * std_dev;
        let strong_width = self.strong_sigmas * std_dev;

        let residual = point.value() - point_forecast;
        let incr = self.alpha * residual;
        self.variance = (1.0 - self.alpha) * (self.variance + residual * incr);

        Ok(IntervalForecast::new(
            point_forecast + strong_width,
            point_forecast + weak_width,
            point_forecast - weak_width,
            point_forecast - strong_width,
        ))
    }
}
