//! Buffered EDM-X breakout detector.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::edmx;
use detect_api::EdmxConfig;
use detect_spi::{
    AnomalyLevel, BreakoutResult, DetectError, Detector, DetectorResult, MetricPoint, Result,
};

/// Breakout detector running EDM-X over a sliding buffer of the most
/// recent `buffer_size` observations.
///
/// Reports warm-up until the buffer is full; once full, every point
/// triggers a fresh evaluation over the whole buffer. This is by far the
/// most compute-intensive detector in the engine (O(num_perms * n^2) per
/// point), so buffer size and permutation count bound its latency.
pub struct EdmxBreakoutDetector {
    config: EdmxConfig,
    buffer: VecDeque<(i64, f64)>,
    rng: StdRng,
}

impl EdmxBreakoutDetector {
    pub const NAME: &'static str = "edmx";

    pub fn new(config: &EdmxConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            delta = config.delta,
            buffer_size = config.buffer_size,
            num_perms = config.num_perms,
            "creating EDM-X breakout detector"
        );
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config: config.clone(),
            buffer: VecDeque::with_capacity(config.buffer_size),
            rng,
        })
    }

    fn level_for_p_value(&self, p_value: f64) -> AnomalyLevel {
        if p_value <= self.config.strong_alpha {
            AnomalyLevel::Strong
        } else if p_value <= self.config.weak_alpha {
            AnomalyLevel::Weak
        } else {
            AnomalyLevel::Normal
        }
    }
}

impl Detector for EdmxBreakoutDetector {
    fn classify(&mut self, point: &MetricPoint) -> Result<DetectorResult> {
        if !point.value().is_finite() {
            return Err(DetectError::InvalidData(
                "observed value must be finite".to_string(),
            ));
        }

        self.buffer.push_back((point.timestamp(), point.value()));
        if self.buffer.len() > self.config.buffer_size {
            self.buffer.pop_front();
        }

        if self.buffer.len() < self.config.buffer_size {
            tracing::trace!(
                size = self.buffer.len(),
                to_go = self.config.buffer_size - self.buffer.len(),
                "EDM-X detector warming up"
            );
            return Ok(DetectorResult::Breakout(BreakoutResult::warming_up()));
        }

        let values: Vec<f64> = self.buffer.iter().map(|(_, value)| *value).collect();
        let estimate = edmx::estimate(
            &values,
            self.config.delta,
            self.config.num_perms,
            self.config.weak_alpha,
            &mut self.rng,
        )?;

        let Some(location) = estimate.location else {
            return Ok(DetectorResult::Breakout(BreakoutResult::quiet()));
        };

        let (timestamp, _) = self.buffer[location];
        let level = self.level_for_p_value(estimate.p_value);

        Ok(DetectorResult::Breakout(BreakoutResult {
            warmup: false,
            timestamp: Some(timestamp),
            estimate: Some(estimate),
            level,
        }))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
