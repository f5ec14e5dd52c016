//! EWMA point forecaster.

use detect_api::EwmaConfig;
use detect_spi::{MetricPoint, PointForecast, PointForecaster, Result};

/// Point forecaster based on the exponentially weighted moving average.
///
/// Each call forecasts the mean as estimated before the new observation,
/// then folds the observation in:
/// `diff = x - mean; mean += alpha * diff`.
#[derive(Debug, Clone)]
pub struct EwmaPointForecaster {
    alpha: f64,
    mean: f64,
}

impl EwmaPointForecaster {
    pub fn new(config: &EwmaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alpha: config.alpha,
            mean: config.init_mean_estimate,
        })
    }

    /// Current mean estimate.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    fn update_estimate(&mut self, value: f64) {
        let diff = value - self.mean;
        self.mean += self.alpha * diff;
    }
}

impl PointForecaster for EwmaPointForecaster {
    fn forecast(&mut self, point: &MetricPoint) -> Result<PointForecast> {
        let predicted = self.mean;
        self.update_estimate(point.value());
        Ok(PointForecast::new(predicted, false))
    }
}
