//! Power-law interval forecaster.

use detect_api::PowerLawIntervalConfig;
use detect_spi::{IntervalForecast, IntervalForecaster, MetricPoint, Result};

/// Interval forecaster whose band width grows as a power of the signal
/// level: `width = alpha * point_forecast^beta`. Models heteroscedastic
/// noise where dispersion scales with magnitude.
#[derive(Debug, Clone)]
pub struct PowerLawIntervalForecaster {
    alpha: f64,
    beta: f64,
    weak_multiplier: f64,
    strong_multiplier: f64,
}

impl PowerLawIntervalForecaster {
    pub fn new(config: &PowerLawIntervalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alpha: config.alpha,
            beta: config.beta,
            weak_multiplier: config.weak_multiplier,
            strong_multiplier: config.strong_multiplier,
        })
    }
}

impl IntervalForecaster for PowerLawIntervalForecaster {
    fn forecast(&mut self, _point: &MetricPoint, point_forecast: f64) -> Result<IntervalForecast> {
        let width = self.alpha * point_forecast.powf(self.beta);
        let weak_width = self.weak_multiplier * width;
        let strong_width = self.strong_multiplier * width;
        Ok(IntervalForecast::new(
            point_forecast + strong_width,
            point_forecast + weak_width,
            point_forecast - weak_width,
            point_forecast - strong_width,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.001;

    fn config() -> PowerLawIntervalConfig {
        PowerLawIntervalConfig {
            alpha: 0.5,
            beta: 0.85,
            weak_multiplier: 3.0,
            strong_multiplier: 4.0,
        }
    }

    #[test]
    fn test_forecast() {
        let mut forecaster = PowerLawIntervalForecaster::new(&config()).unwrap();
        let point_forecast = 132.4;
        let point = MetricPoint::new("m", point_forecast, 0);

        let interval = forecaster.forecast(&point, point_forecast).unwrap();

        let width = 0.5 * point_forecast.powf(0.85);
        assert!((interval.upper_strong() - (point_forecast + 4.0 * width)).abs() < TOLERANCE);
        assert!((interval.upper_weak() - (point_forecast + 3.0 * width)).abs() < TOLERANCE);
        assert!((interval.lower_weak() - (point_forecast - 3.0 * width)).abs() < TOLERANCE);
        assert!((interval.lower_strong() - (point_forecast - 4.0 * width)).abs() < TOLERANCE);
    }

    #[test]
    fn test_width_grows_with_signal_level() {
        let mut forecaster = PowerLawIntervalForecaster::new(&config()).unwrap();
        let point = MetricPoint::new("m", 0.0, 0);

        let narrow = forecaster.forecast(&point, 10.0).unwrap();
        let wide = forecaster.forecast(&point, 1000.0).unwrap();

        let narrow_width = narrow.upper_weak() - 10.0;
        let wide_width = wide.upper_weak() - 1000.0;
        assert!(wide_width > narrow_width);
    }

    #[test]
    fn test_rejects_negative_alpha() {
        let bad = PowerLawIntervalConfig {
            alpha: -0.5,
            ..config()
        };
        assert!(PowerLawIntervalForecaster::new(&bad).is_err());
    }
}
