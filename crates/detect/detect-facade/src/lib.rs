//! Detection Facade
//!
//! Single entry point to the detection engine:
//! - Traits, models, and errors from the SPI
//! - Configuration types from the API
//! - Classifier, forecasters, and detectors from Core

// Re-export everything from SPI
pub use detect_spi::*;

// Re-export everything from API
pub use detect_api::*;

// Re-export everything from Core
pub use detect_core::*;
