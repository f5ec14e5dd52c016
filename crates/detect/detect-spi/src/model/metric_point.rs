//! Metric data point model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single observation in a metric stream.
///
/// Immutable once constructed: all access is through getters and there
/// are no mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    series_key: String,
    #[serde(default)]
    tags: BTreeMap<String, String>,
    value: f64,
    timestamp: i64,
}

impl MetricPoint {
    /// Create a point with no tags.
    pub fn new(series_key: impl Into<String>, value: f64, timestamp: i64) -> Self {
        Self {
            series_key: series_key.into(),
            tags: BTreeMap::new(),
            value,
            timestamp,
        }
    }

    /// Create a point with a tag set. Tag ordering is irrelevant; the map
    /// is stored sorted so equal tag sets compare equal.
    pub fn with_tags(
        series_key: impl Into<String>,
        tags: BTreeMap<String, String>,
        value: f64,
        timestamp: i64,
    ) -> Self {
        Self {
            series_key: series_key.into(),
            tags,
            value,
            timestamp,
        }
    }

    pub fn series_key(&self) -> &str {
        &self.series_key
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Observation time in epoch seconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
