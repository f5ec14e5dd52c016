//! Seasonal naive point forecaster.

use detect_api::SeasonalNaiveConfig;
use detect_spi::{DetectError, MetricPoint, PointForecast, PointForecaster, Result};

/// Forecasts the value observed exactly one cycle ago.
///
/// Holds a fixed ring buffer of one cycle of observations, keyed by
/// timestamp arithmetic. Intervals skipped in the stream are padded with
/// a missing-value placeholder so the buffer stays aligned to wall-clock
/// positions; a placeholder forecast is reported as warm-up.
#[derive(Debug, Clone)]
pub struct SeasonalNaivePointForecaster {
    buffer: SeasonalBuffer,
}

impl SeasonalNaivePointForecaster {
    pub fn new(config: &SeasonalNaiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            buffer: SeasonalBuffer::new(config.cycle_length, config.interval_seconds),
        })
    }
}

impl PointForecaster for SeasonalNaivePointForecaster {
    fn forecast(&mut self, point: &MetricPoint) -> Result<PointForecast> {
        let cycle_old = self.buffer.update_while_padding(point)?;
        let warmup = !self.buffer.is_ready() || cycle_old.is_nan();
        Ok(PointForecast::new(cycle_old, warmup))
    }
}

/// One cycle of historical values, padded for missing intervals.
#[derive(Debug, Clone)]
struct SeasonalBuffer {
    cycle_length: usize,
    interval: i64,
    buffer: Vec<f64>,
    index: usize,
    first_timestamp: Option<i64>,
    last_timestamp: Option<i64>,
}

impl SeasonalBuffer {
    fn new(cycle_length: usize, interval: i64) -> Self {
        Self {
            cycle_length,
            interval,
            buffer: vec![f64::NAN; cycle_length],
            index: 0,
            first_timestamp: None,
            last_timestamp: None,
        }
    }

    /// Record the point and return the value it displaced, i.e. the
    /// observation from one cycle earlier at this buffer position.
    fn update_while_padding(&mut self, point: &MetricPoint) -> Result<f64> {
        self.check_timestamp(point)?;
        self.pad_missing_points(point);
        let displaced = self.buffer[self.index];
        self.push(point.value());
        self.last_timestamp = Some(point.timestamp());
        Ok(displaced)
    }

    /// A full cycle has elapsed since the first observation.
    fn is_ready(&self) -> bool {
        match (self.first_timestamp, self.last_timestamp) {
            (Some(first), Some(last)) => {
                last - (first + self.cycle_length as i64 * self.interval) >= 0
            }
            _ => false,
        }
    }

    fn check_timestamp(&self, point: &MetricPoint) -> Result<()> {
        if let Some(last) = self.last_timestamp {
            if point.timestamp() <= last {
                return Err(DetectError::InvalidData(format!(
                    "timestamp {} is not after the last observed timestamp {}",
                    point.timestamp(),
                    last
                )));
            }
        }
        Ok(())
    }

    fn pad_missing_points(&mut self, point: &MetricPoint) {
        let Some(last) = self.last_timestamp else {
            // First point starts the cycle; nothing earlier to pad.
            self.first_timestamp = Some(point.timestamp());
            tracing::debug!(
                cycle_length = self.cycle_length,
                interval = self.interval,
                timestamp = point.timestamp(),
                "first data point received for seasonal buffer"
            );
            return;
        };
        let skipped = ((point.timestamp() - last) / self.interval - 1).max(0);
        for _ in 0..skipped {
            self.push(f64::NAN);
        }
    }

    fn push(&mut self, value: f64) {
        self.buffer[self.index] = value;
        self.index = (self.index + 1) % self.buffer.len();
    }
}
