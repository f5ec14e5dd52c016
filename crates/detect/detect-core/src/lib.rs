//! Detection Core
//!
//! Implementations of the detection engine: the anomaly classifier, the
//! point and interval forecasters, and the composed and self-contained
//! outlier detectors.

mod classifier;
mod constant;
mod cusum;
mod forecasting;
pub mod interval;
pub mod point;

pub use classifier::AnomalyClassifier;
pub use constant::ConstantThresholdDetector;
pub use cusum::CusumDetector;
pub use forecasting::ForecastingDetector;
pub use interval::{
    AdditiveIntervalForecaster, ExponentialWelfordIntervalForecaster,
    MultiplicativeIntervalForecaster, PowerLawIntervalForecaster,
};
pub use point::{
    EwmaPointForecaster, HoltWintersDetector, HoltWintersPointForecaster, PewmaPointForecaster,
    SeasonalNaivePointForecaster, SmaPointForecaster,
};
