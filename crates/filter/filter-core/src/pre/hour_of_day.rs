//! Hour-of-day detection gate.

use crate::chain::{DetectionFilter, DetectionFilterChain};
use detect_api::HourOfDayConfig;
use detect_spi::{DetectorResult, MetricPoint, OutlierResult, Result};

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// Passes a point to detection only when its UTC hour falls within the
/// configured window, inclusive on both ends. Points outside the window
/// yield an empty normal result and the rest of the chain never runs.
///
/// Equal start and end hours mean "always pass"; a start after the end
/// wraps the window across midnight.
#[derive(Debug, Clone)]
pub struct HourOfDayFilter {
    utc_start_hour: u32,
    utc_end_hour: u32,
}

impl HourOfDayFilter {
    pub fn new(config: &HourOfDayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            utc_start_hour: config.utc_start_hour,
            utc_end_hour: config.utc_end_hour,
        })
    }

    fn passes(&self, hour: u32) -> bool {
        if self.utc_start_hour == self.utc_end_hour {
            return true;
        }
        if self.utc_start_hour <= self.utc_end_hour {
            (self.utc_start_hour..=self.utc_end_hour).contains(&hour)
        } else {
            hour >= self.utc_start_hour || hour <= self.utc_end_hour
        }
    }
}

/// UTC hour of an epoch-seconds timestamp, valid for timestamps before
/// the epoch as well.
fn utc_hour(timestamp: i64) -> u32 {
    (timestamp.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32
}

impl DetectionFilter for HourOfDayFilter {
    fn do_filter(
        &mut self,
        point: &MetricPoint,
        chain: &mut DetectionFilterChain<'_>,
    ) -> Result<DetectorResult> {
        if self.passes(utc_hour(point.timestamp())) {
            chain.do_filter(point)
        } else {
            Ok(DetectorResult::Outlier(OutlierResult::empty()))
        }
    }
}
