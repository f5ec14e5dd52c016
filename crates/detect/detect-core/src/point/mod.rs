//! Point forecaster implementations.

mod ewma;
mod holt_winters;
mod pewma;
mod seasonal_naive;
mod sma;

pub use ewma::EwmaPointForecaster;
pub use holt_winters::{HoltWintersDetector, HoltWintersPointForecaster};
pub use pewma::PewmaPointForecaster;
pub use seasonal_naive::SeasonalNaivePointForecaster;
pub use sma::SmaPointForecaster;
