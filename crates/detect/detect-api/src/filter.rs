//! Detection filter configurations.

use serde::{Deserialize, Serialize};

use crate::{require, Result};

/// M-of-N aggregation filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MOfNConfig {
    /// Anomalies among the last `n` levels required to escalate.
    pub m: usize,
    /// Window size.
    pub n: usize,
}

impl MOfNConfig {
    pub fn new(m: usize, n: usize) -> Self {
        Self { m, n }
    }

    pub fn validate(&self) -> Result<()> {
        require(self.m > 0, "m", "must be > 0")?;
        require(self.n >= self.m, "n", "must be >= m")
    }
}

/// Hour-of-day gate configuration.
///
/// Points pass only when their UTC hour lies in
/// `[utc_start_hour, utc_end_hour]` inclusive. Equal start and end hours
/// mean the filter passes at all hours of the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourOfDayConfig {
    pub utc_start_hour: u32,
    pub utc_end_hour: u32,
}

impl HourOfDayConfig {
    pub fn new(utc_start_hour: u32, utc_end_hour: u32) -> Self {
        Self {
            utc_start_hour,
            utc_end_hour,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(
            self.utc_start_hour <= 23,
            "utc_start_hour",
            "must be between 0 and 23",
        )?;
        require(
            self.utc_end_hour <= 23,
            "utc_end_hour",
            "must be between 0 and 23",
        )
    }
}
