//! Simple training phase for Holt-Winters initial components.

use super::components::HoltWintersComponents;
use detect_api::SeasonalityType;

/// Estimates the initial level, base, and seasonal components from the
/// first two cycles of data, the way R's `forecast` package does for
/// `initial = "simple"`.
///
/// Level and seasonals come from the first cycle, the base from the gap
/// between the cycle means. Once both cycles are captured, the stored
/// observations are replayed through the online recursion so the
/// smoothing parameters apply retrospectively; after that the components
/// hold a forecast for the first live observation.
#[derive(Debug, Clone)]
pub(crate) struct SimpleTrainingModel {
    n: usize,
    first_cycle: Vec<f64>,
    second_cycle: Vec<f64>,
}

impl SimpleTrainingModel {
    pub(crate) fn new(frequency: usize) -> Self {
        Self {
            n: 0,
            first_cycle: vec![0.0; frequency],
            second_cycle: vec![0.0; frequency],
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.n >= self.first_cycle.len() + self.second_cycle.len()
    }

    pub(crate) fn observe_and_train(
        &mut self,
        y: f64,
        seasonality: SeasonalityType,
        components: &mut HoltWintersComponents,
    ) {
        assert!(!self.is_complete(), "training invoked after completion");
        let frequency = self.first_cycle.len();

        if self.n < frequency {
            self.first_cycle[self.n] = y;
        } else {
            self.second_cycle[self.n - frequency] = y;
        }

        if self.n == 2 * frequency - 1 {
            let level = mean(&self.first_cycle);
            components.set_level(level);
            for (i, value) in self.first_cycle.iter().enumerate() {
                let seasonal = match seasonality {
                    SeasonalityType::Multiplicative => value / level,
                    SeasonalityType::Additive => value - level,
                };
                components.set_seasonal(i, seasonal, y);
            }
            let base = (mean(&self.second_cycle) - level) / frequency as f64;
            components.set_base(base);

            // Replay both cycles through the online recursion.
            for value in self.first_cycle.iter().chain(self.second_cycle.iter()) {
                components.observe(*value);
            }
        }
        self.n += 1;
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
