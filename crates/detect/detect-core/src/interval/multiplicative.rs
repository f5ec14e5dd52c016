//! Multiplicative interval forecaster.

use detect_api::MultiplicativeIntervalConfig;
use detect_spi::{IntervalForecast, IntervalForecaster, MetricPoint, Result};

/// Interval forecaster whose offsets scale with the point forecast:
/// `point_forecast * (1 ± multiplier)`.
#[derive(Debug, Clone)]
pub struct MultiplicativeIntervalForecaster {
    weak_multiplier: f64,
    strong_multiplier: f64,
}

impl MultiplicativeIntervalForecaster {
    pub fn new(config: &MultiplicativeIntervalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            weak_multiplier: config.weak_multiplier,
            strong_multiplier: config.strong_multiplier,
        })
    }
}

impl IntervalForecaster for MultiplicativeIntervalForecaster {
    fn forecast(&mut self, _point: &MetricPoint, point_forecast: f64) -> Result<IntervalForecast> {
        let weak_width = point_forecast * self.weak_multiplier;
        let strong_width = point_forecast * self.strong_multiplier;
        Ok(IntervalForecast::new(
            point_forecast + strong_width,
            point_forecast + weak_width,
            point_forecast - weak_width,
            point_forecast - strong_width,
        ))
    }
}
