//! Detection Service Provider Interface
//!
//! Defines the traits and shared types for the online detection engine.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Detector, IntervalForecaster, PointForecaster};
pub use error::{DetectError, Result};
pub use model::{
    AnomalyLevel, AnomalyThresholds, BreakoutEstimate, BreakoutResult, DetectorResult,
    IntervalForecast, MetricPoint, OutlierResult, PointForecast, TailType,
};
