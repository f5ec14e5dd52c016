//! Forecasting detector: point forecaster + interval forecaster +
//! classifier.

use crate::classifier::AnomalyClassifier;
use crate::interval::ExponentialWelfordIntervalForecaster;
use crate::point::{EwmaPointForecaster, PewmaPointForecaster};
use detect_api::{EwmaConfig, PewmaConfig, WelfordIntervalConfig};
use detect_spi::{
    DetectError, Detector, DetectorResult, IntervalForecaster, MetricPoint, OutlierResult,
    PointForecaster, Result, TailType,
};

/// Detector built from a point forecaster and an interval forecaster.
///
/// Generates a one-step-ahead forecast, builds weak/strong bands around
/// it, and classifies how far the observed value sits from the forecast.
/// The forecast compared against each observation was produced before
/// that observation was seen.
pub struct ForecastingDetector {
    name: String,
    point_forecaster: Box<dyn PointForecaster>,
    interval_forecaster: Box<dyn IntervalForecaster>,
    classifier: AnomalyClassifier,
    warm_up_period: usize,
    observation_count: usize,
}

impl ForecastingDetector {
    pub fn new(
        name: impl Into<String>,
        point_forecaster: Box<dyn PointForecaster>,
        interval_forecaster: Box<dyn IntervalForecaster>,
        tail: TailType,
        warm_up_period: usize,
    ) -> Self {
        let name = name.into();
        tracing::debug!(detector = %name, warm_up_period, "creating forecasting detector");
        Self {
            name,
            point_forecaster,
            interval_forecaster,
            classifier: AnomalyClassifier::new(tail),
            warm_up_period,
            observation_count: 0,
        }
    }

    /// EWMA detector: EWMA point forecaster paired with an exponential
    /// Welford interval forecaster sharing the same weighting.
    pub fn ewma(config: &EwmaConfig, tail: TailType) -> Result<Self> {
        let point = EwmaPointForecaster::new(config)?;
        let interval = ExponentialWelfordIntervalForecaster::new(&WelfordIntervalConfig {
            alpha: config.alpha,
            init_variance_estimate: 0.0,
            weak_sigmas: config.weak_sigmas,
            strong_sigmas: config.strong_sigmas,
        })?;
        Ok(Self::new("ewma", Box::new(point), Box::new(interval), tail, 0))
    }

    /// PEWMA detector, wired like [`ewma`](Self::ewma) with the adaptive
    /// forecaster and its training period as warm-up.
    pub fn pewma(config: &PewmaConfig, tail: TailType) -> Result<Self> {
        let point = PewmaPointForecaster::new(config)?;
        let interval = ExponentialWelfordIntervalForecaster::new(&WelfordIntervalConfig {
            alpha: config.alpha,
            init_variance_estimate: 0.0,
            weak_sigmas: config.weak_sigmas,
            strong_sigmas: config.strong_sigmas,
        })?;
        Ok(Self::new(
            "pewma",
            Box::new(point),
            Box::new(interval),
            tail,
            config.warm_up_period,
        ))
    }

    fn classify_inner(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        self.observation_count += 1;

        let point_forecast = self.point_forecaster.forecast(point)?;
        if self.observation_count <= self.warm_up_period || point_forecast.warmup() {
            tracing::trace!(
                detector = %self.name,
                seen = self.observation_count,
                "detector warming up"
            );
            return Ok(DetectorResult::Outlier(OutlierResult::warmup()));
        }

        let interval = self
            .interval_forecaster
            .forecast(point, point_forecast.value())?;
        let thresholds = interval.to_thresholds()?;
        let level = self.classifier.classify(&thresholds, point.value());

        Ok(DetectorResult::Outlier(
            OutlierResult::new(level)
                .with_predicted(point_forecast.value())
                .with_thresholds(thresholds),
        ))
    }
}

impl Detector for ForecastingDetector {
    fn classify(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        if !point.value().is_finite() {
            return Err(DetectError::InvalidData(
                "observed value must be finite".to_string(),
            ));
        }
        self.classify_inner(point)
            .map_err(|source| DetectError::ClassificationFailed {
                detector: self.name.clone(),
                source: Box::new(source),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
