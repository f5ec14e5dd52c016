//! Holt-Winters (triple exponential smoothing) forecaster and detector.

mod components;
mod training;

use components::HoltWintersComponents;
use training::SimpleTrainingModel;

use crate::classifier::AnomalyClassifier;
use detect_api::{HoltWintersConfig, HoltWintersTrainingMethod, SeasonalityType};
use detect_spi::{
    AnomalyThresholds, DetectError, Detector, DetectorResult, MetricPoint, OutlierResult,
    PointForecast, PointForecaster, Result, TailType,
};

/// Point forecaster based on the Holt-Winters method, with level, base,
/// and seasonal components. Captures seasonality that the flat smoothing
/// forecasters cannot.
#[derive(Debug, Clone)]
pub struct HoltWintersPointForecaster {
    seasonality: SeasonalityType,
    warm_up_period: usize,
    components: HoltWintersComponents,
    training: Option<SimpleTrainingModel>,
}

impl HoltWintersPointForecaster {
    pub fn new(config: &HoltWintersConfig) -> Result<Self> {
        let components = HoltWintersComponents::new(config)?;

        let training_period = config.init_training_period();
        let mut warm_up_period = config.warm_up_period;
        if warm_up_period < training_period {
            // The simple training phase spans two full cycles; a shorter
            // warm-up cannot be honored.
            tracing::warn!(
                configured = warm_up_period,
                effective = training_period,
                "warm_up_period raised to cover the simple training phase"
            );
            warm_up_period = training_period;
        }

        let training = match config.init_training_method {
            HoltWintersTrainingMethod::Simple => Some(SimpleTrainingModel::new(config.frequency)),
            HoltWintersTrainingMethod::None => None,
        };

        Ok(Self {
            seasonality: config.seasonality_type,
            warm_up_period,
            components,
            training,
        })
    }

    pub(crate) fn components(&self) -> &HoltWintersComponents {
        &self.components
    }

    fn training_complete(&self) -> bool {
        self.training
            .as_ref()
            .map(|model| model.is_complete())
            .unwrap_or(true)
    }

    fn observe(&mut self, y: f64) {
        match &mut self.training {
            Some(model) if !model.is_complete() => {
                model.observe_and_train(y, self.seasonality, &mut self.components);
            }
            _ => self.components.observe(y),
        }
    }

    fn warming_up(&self) -> bool {
        !self.training_complete() || self.components.n() <= self.warm_up_period as u64
    }
}

impl PointForecaster for HoltWintersPointForecaster {
    fn forecast(&mut self, point: &MetricPoint) -> Result<PointForecast> {
        let predicted = self.components.forecast();
        self.observe(point.value());
        Ok(PointForecast::new(predicted, self.warming_up()))
    }
}

/// Self-contained Holt-Winters anomaly detector.
///
/// Wraps the point forecaster and derives classification bands from the
/// per-season running statistics: thresholds are the previous forecast
/// offset by `sigmas * seasonal_std_dev`.
pub struct HoltWintersDetector {
    forecaster: HoltWintersPointForecaster,
    classifier: AnomalyClassifier,
    weak_sigmas: f64,
    strong_sigmas: f64,
}

impl HoltWintersDetector {
    pub const NAME: &'static str = "holt-winters";

    pub fn new(config: &HoltWintersConfig, tail: TailType) -> Result<Self> {
        let forecaster = HoltWintersPointForecaster::new(config)?;
        tracing::debug!(
            frequency = config.frequency,
            seasonality = ?config.seasonality_type,
            "creating Holt-Winters detector"
        );
        Ok(Self {
            forecaster,
            classifier: AnomalyClassifier::new(tail),
            weak_sigmas: config.weak_sigmas,
            strong_sigmas: config.strong_sigmas,
        })
    }

    fn classify_inner(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        let forecast = self.forecaster.forecast(point)?;
        if forecast.warmup() {
            return Ok(DetectorResult::Outlier(OutlierResult::warmup()));
        }

        let components = self.forecaster.components();
        let std_dev = components.seasonal_std_dev(components.current_seasonal_index());
        let thresholds = AnomalyThresholds::band(
            forecast.value(),
            self.weak_sigmas * std_dev,
            self.strong_sigmas * std_dev,
        )?;
        let level = self.classifier.classify(&thresholds, point.value());

        Ok(DetectorResult::Outlier(
            OutlierResult::new(level)
                .with_predicted(forecast.value())
                .with_thresholds(thresholds),
        ))
    }
}

impl Detector for HoltWintersDetector {
    fn classify(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        if !point.value().is_finite() {
            return Err(DetectError::InvalidData(
                "observed value must be finite".to_string(),
            ));
        }
        self.classify_inner(point)
            .map_err(|source| DetectError::ClassificationFailed {
                detector: Self::NAME.to_string(),
                source: Box::new(source),
            })
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
