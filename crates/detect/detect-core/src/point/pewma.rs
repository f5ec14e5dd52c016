//! PEWMA point forecaster.

use std::f64::consts::PI;

use detect_api::PewmaConfig;
use detect_spi::{MetricPoint, PointForecast, PointForecaster, Result};

/// Probabilistic EWMA point forecaster.
///
/// An adaptive-alpha EWMA that down-weights probable anomalies: the
/// effective decay for each observation is scaled by the Gaussian density
/// of its standardized residual, so surprising points move the estimates
/// less. During the first `warm_up_period` observations the update
/// degenerates to a plain running average.
#[derive(Debug, Clone)]
pub struct PewmaPointForecaster {
    beta: f64,
    warm_up_period: usize,
    /// Decay matching the paper's convention (`1 - alpha`).
    adj_alpha: f64,
    training_count: usize,
    s1: f64,
    s2: f64,
    mean: f64,
    std_dev: f64,
}

impl PewmaPointForecaster {
    pub fn new(config: &PewmaConfig) -> Result<Self> {
        config.validate()?;
        let s1 = config.init_mean_estimate;
        let s2 = s1 * s1;
        let mut forecaster = Self {
            beta: config.beta,
            warm_up_period: config.warm_up_period,
            adj_alpha: 1.0 - config.alpha,
            training_count: 1,
            s1,
            s2,
            mean: 0.0,
            std_dev: 0.0,
        };
        forecaster.update_mean_and_std_dev();
        Ok(forecaster)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    fn update_mean_and_std_dev(&mut self) {
        self.mean = self.s1;
        self.std_dev = (self.s2 - self.s1 * self.s1).max(0.0).sqrt();
    }

    fn update_estimates(&mut self, value: f64) {
        let z = if self.std_dev == 0.0 {
            0.0
        } else {
            (value - self.mean) / self.std_dev
        };
        let density = (1.0 / (2.0 * PI).sqrt()) * (-0.5 * z * z).exp();
        let alpha_t = self.effective_alpha(density);

        self.s1 = alpha_t * self.s1 + (1.0 - alpha_t) * value;
        self.s2 = alpha_t * self.s2 + (1.0 - alpha_t) * value * value;
        self.update_mean_and_std_dev();
    }

    fn effective_alpha(&mut self, density: f64) -> f64 {
        if self.training_count < self.warm_up_period {
            self.training_count += 1;
            return 1.0 - 1.0 / self.training_count as f64;
        }
        (1.0 - self.beta * density) * self.adj_alpha
    }

    fn warming_up(&self) -> bool {
        self.training_count < self.warm_up_period
    }
}

impl PointForecaster for PewmaPointForecaster {
    fn forecast(&mut self, point: &MetricPoint) -> Result<PointForecast> {
        let predicted = self.mean;
        let warmup = self.warming_up();
        self.update_estimates(point.value());
        Ok(PointForecast::new(predicted, warmup))
    }
}
