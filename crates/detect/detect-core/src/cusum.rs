//! CUSUM detector.

use detect_api::CusumConfig;
use detect_spi::{
    AnomalyLevel, DetectError, Detector, DetectorResult, MetricPoint, OutlierResult, Result,
    TailType,
};

/// Estimates sigma from the average moving range, per the individuals
/// control chart convention.
const STD_DEV_DIVISOR: f64 = 1.128;

/// Detector based on one-sided cumulative sums of deviations from a
/// target value. Sensitive to small persistent shifts that per-point
/// thresholding misses.
///
/// Strict comparisons: a constant series has zero estimated deviation,
/// and a repeat of the same value must classify as normal.
#[derive(Debug, Clone)]
pub struct CusumDetector {
    tail: TailType,
    target_value: f64,
    slack_param: f64,
    warm_up_period: usize,
    weak_sigmas: f64,
    strong_sigmas: f64,
    observation_count: usize,
    sum_high: f64,
    sum_low: f64,
    moving_range: f64,
    prev_value: f64,
}

impl CusumDetector {
    pub const NAME: &'static str = "cusum";

    pub fn new(config: &CusumConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tail: config.tail,
            target_value: config.target_value,
            slack_param: config.slack_param,
            warm_up_period: config.warm_up_period,
            weak_sigmas: config.weak_sigmas,
            strong_sigmas: config.strong_sigmas,
            observation_count: 0,
            sum_high: 0.0,
            sum_low: 0.0,
            moving_range: 0.0,
            prev_value: config.init_mean_estimate,
        })
    }

    pub fn sum_high(&self) -> f64 {
        self.sum_high
    }

    pub fn sum_low(&self) -> f64 {
        self.sum_low
    }

    fn average_moving_range(&self) -> f64 {
        if self.observation_count > 1 {
            self.moving_range / (self.observation_count - 1) as f64
        } else {
            self.moving_range
        }
    }

    fn reset_sums(&mut self) {
        self.sum_high = 0.0;
        self.sum_low = 0.0;
    }

    fn classify_sums(&mut self, weak_delta: f64, strong_delta: f64) -> AnomalyLevel {
        let above_high = |sum: f64, delta: f64| sum > delta;
        let below_low = |sum: f64, delta: f64| sum < -delta;

        let (strong, weak) = match self.tail {
            TailType::LeftTailed => (
                below_low(self.sum_low, strong_delta),
                below_low(self.sum_low, weak_delta),
            ),
            TailType::RightTailed => (
                above_high(self.sum_high, strong_delta),
                above_high(self.sum_high, weak_delta),
            ),
            TailType::TwoTailed => (
                above_high(self.sum_high, strong_delta) || below_low(self.sum_low, strong_delta),
                above_high(self.sum_high, weak_delta) || below_low(self.sum_low, weak_delta),
            ),
        };

        if strong {
            self.reset_sums();
            AnomalyLevel::Strong
        } else if weak {
            AnomalyLevel::Weak
        } else {
            AnomalyLevel::Normal
        }
    }
}

impl Detector for CusumDetector {
    fn classify(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        let observed = point.value();
        if !observed.is_finite() {
            return Err(DetectError::InvalidData(
                "observed value must be finite".to_string(),
            ));
        }

        self.observation_count += 1;
        self.moving_range += (self.prev_value - observed).abs();

        let std_dev = self.average_moving_range() / STD_DEV_DIVISOR;
        let slack = self.slack_param * std_dev;
        let weak_delta = self.weak_sigmas * std_dev;
        let strong_delta = self.strong_sigmas * std_dev;

        self.sum_high = (self.sum_high + observed - (self.target_value + slack)).max(0.0);
        self.sum_low = (self.sum_low + observed - (self.target_value - slack)).min(0.0);
        self.prev_value = observed;

        let level = if self.observation_count <= self.warm_up_period {
            AnomalyLevel::ModelWarmup
        } else {
            self.classify_sums(weak_delta, strong_delta)
        };

        Ok(DetectorResult::Outlier(OutlierResult::new(level)))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
