//! Breakout Core
//!
//! Change-point detection based on the E-Divisive with Exact Medians
//! (EDM-X) algorithm, as described in "Leveraging Cloud Data to Mitigate
//! User Experience from 'Breaking Bad'" by James et al
//! (<https://arxiv.org/abs/1411.7955>), with a running-median structure
//! keeping each inner step logarithmic and a permutation test for
//! significance.

mod detector;
pub mod edmx;
mod running_median;

pub use detector::EdmxBreakoutDetector;
pub use running_median::RunningMedian;
