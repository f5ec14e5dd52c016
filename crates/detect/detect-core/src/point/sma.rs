//! Simple moving average point forecaster.

use std::collections::VecDeque;

use detect_api::SmaConfig;
use detect_spi::{MetricPoint, PointForecast, PointForecaster, Result};

/// Point forecaster based on the simple moving average of the last
/// `look_back_period` observations. The mean is maintained incrementally
/// from the window sum rather than recomputed per point.
#[derive(Debug, Clone)]
pub struct SmaPointForecaster {
    look_back_period: usize,
    window: VecDeque<f64>,
    mean: f64,
}

impl SmaPointForecaster {
    pub fn new(config: &SmaConfig) -> Result<Self> {
        config.validate()?;
        let mut forecaster = Self {
            look_back_period: config.look_back_period,
            window: VecDeque::with_capacity(config.look_back_period),
            mean: 0.0,
        };
        for value in &config.initial_values {
            forecaster.update_mean_estimate(*value);
        }
        Ok(forecaster)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    fn update_mean_estimate(&mut self, observed: f64) {
        let mut mean_sum = self.mean * self.window.len() as f64;

        // Evict the head's contribution only once the window is full.
        if self.window.len() == self.look_back_period {
            if let Some(head) = self.window.pop_front() {
                mean_sum -= head;
            }
        }

        self.window.push_back(observed);
        mean_sum += observed;
        self.mean = mean_sum / self.window.len() as f64;
    }
}

impl PointForecaster for SmaPointForecaster {
    fn forecast(&mut self, point: &MetricPoint) -> Result<PointForecast> {
        let warmup = self.window.is_empty();
        let predicted = if warmup { point.value() } else { self.mean };
        self.update_mean_estimate(point.value());
        Ok(PointForecast::new(predicted, warmup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_mean_over_partial_window() {
        let config = SmaConfig {
            look_back_period: 4,
            initial_values: Vec::new(),
        };
        let mut forecaster = SmaPointForecaster::new(&config).unwrap();

        forecaster.forecast(&MetricPoint::new("m", 2.0, 0)).unwrap();
        forecaster.forecast(&MetricPoint::new("m", 4.0, 0)).unwrap();
        assert!((forecaster.mean() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_window_evicts_oldest() {
        let config = SmaConfig {
            look_back_period: 3,
            initial_values: Vec::new(),
        };
        let mut forecaster = SmaPointForecaster::new(&config).unwrap();

        for value in [1.0, 2.0, 3.0, 10.0] {
            forecaster.forecast(&MetricPoint::new("m", value, 0)).unwrap();
        }
        // Window is now [2, 3, 10].
        assert!((forecaster.mean() - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_seed_window() {
        let config = SmaConfig {
            look_back_period: 3,
            initial_values: vec![6.0, 9.0],
        };
        let mut forecaster = SmaPointForecaster::new(&config).unwrap();
        assert!((forecaster.mean() - 7.5).abs() < TOLERANCE);

        // A seeded forecaster is past warm-up from the first point.
        let forecast = forecaster
            .forecast(&MetricPoint::new("m", 3.0, 0))
            .unwrap();
        assert!(!forecast.warmup());
        assert!((forecast.value() - 7.5).abs() < TOLERANCE);
        assert!((forecaster.mean() - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_first_point_is_warmup() {
        let mut forecaster = SmaPointForecaster::new(&SmaConfig::default()).unwrap();
        let forecast = forecaster
            .forecast(&MetricPoint::new("m", 5.0, 0))
            .unwrap();
        assert!(forecast.warmup());
    }
}
