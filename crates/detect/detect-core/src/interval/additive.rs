//! Additive interval forecaster.

use detect_api::AdditiveIntervalConfig;
use detect_spi::{IntervalForecast, IntervalForecaster, MetricPoint, Result};

/// Interval forecaster with fixed offsets around the point forecast.
#[derive(Debug, Clone)]
pub struct AdditiveIntervalForecaster {
    weak_value: f64,
    strong_value: f64,
}

impl AdditiveIntervalForecaster {
    pub fn new(config: &AdditiveIntervalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            weak_value: config.weak_value,
            strong_value: config.strong_value,
        })
    }
}

impl IntervalForecaster for AdditiveIntervalForecaster {
    fn forecast(&mut self, _point: &MetricPoint, point_forecast: f64) -> Result<IntervalForecast> {
        Ok(IntervalForecast::new(
            point_forecast + self.strong_value,
            point_forecast + self.weak_value,
            point_forecast - self.weak_value,
            point_forecast - self.strong_value,
        ))
    }
}
