//! Point forecaster trait definition.

use crate::error::Result;
use crate::model::{MetricPoint, PointForecast};

/// One-step-ahead point forecaster.
///
/// Each call returns the forecast for the current tick and then absorbs
/// the observation into the running state. The returned value is computed
/// entirely from state prior to `point`, so the prediction was available
/// before the observation arrived (predict-then-learn).
pub trait PointForecaster: Send {
    /// Return the previous cycle's forecast, then learn from `point`.
    fn forecast(&mut self, point: &MetricPoint) -> Result<PointForecast>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock forecaster that always predicts the last observed value.
    struct NaiveForecaster {
        last: Option<f64>,
    }

    impl PointForecaster for NaiveForecaster {
        fn forecast(&mut self, point: &MetricPoint) -> Result<PointForecast> {
            let forecast = match self.last {
                Some(value) => PointForecast::new(value, false),
                None => PointForecast::new(point.value(), true),
            };
            self.last = Some(point.value());
            Ok(forecast)
        }
    }

    #[test]
    fn test_predict_then_learn_ordering() {
        let mut forecaster = NaiveForecaster { last: None };

        let first = forecaster
            .forecast(&MetricPoint::new("m", 3.0, 0))
            .unwrap();
        assert!(first.warmup());

        // The second forecast must reflect state prior to the new point.
        let second = forecaster
            .forecast(&MetricPoint::new("m", 99.0, 60))
            .unwrap();
        assert!(!second.warmup());
        assert_eq!(second.value(), 3.0);
    }
}
