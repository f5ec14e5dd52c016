//! Online component state for Holt-Winters.

use detect_api::{HoltWintersConfig, SeasonalityType};
use detect_spi::Result;

/// Welford accumulator for count, mean, and sample standard deviation.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunningStats {
    n: u64,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    pub(crate) fn add(&mut self, value: f64) {
        self.n += 1;
        let delta = value - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub(crate) fn n(&self) -> u64 {
        self.n
    }

    /// Sample standard deviation; 0 with fewer than two values.
    pub(crate) fn std_dev(&self) -> f64 {
        if self.n < 2 {
            0.0
        } else {
            (self.m2 / (self.n - 1) as f64).sqrt()
        }
    }
}

/// Level, base, and seasonal component state for the online Holt-Winters
/// recursion, plus the running statistics used to derive classification
/// bands.
#[derive(Debug, Clone)]
pub struct HoltWintersComponents {
    seasonality: SeasonalityType,
    alpha: f64,
    beta: f64,
    gamma: f64,
    level: f64,
    base: f64,
    seasonal: Vec<f64>,
    overall_stats: RunningStats,
    seasonal_stats: Vec<RunningStats>,
    forecast: f64,
}

impl HoltWintersComponents {
    pub(crate) fn new(config: &HoltWintersConfig) -> Result<Self> {
        config.validate()?;

        let identity = config.seasonality_type.identity();
        let level = config.init_level_estimate.unwrap_or(identity);
        let base = config.init_base_estimate.unwrap_or(identity);
        let seasonal = if config.init_seasonal_estimates.is_empty() {
            vec![identity; config.frequency]
        } else {
            config.init_seasonal_estimates.clone()
        };

        let seasonal_stats = seasonal
            .iter()
            .map(|estimate| {
                let mut stats = RunningStats::default();
                stats.add(*estimate);
                stats
            })
            .collect();

        let mut components = Self {
            seasonality: config.seasonality_type,
            alpha: config.alpha,
            beta: config.beta,
            gamma: config.gamma,
            level,
            base,
            seasonal,
            overall_stats: RunningStats::default(),
            seasonal_stats,
            forecast: f64::NAN,
        };
        components.forecast = components.combine(
            components.level,
            components.base,
            components.seasonal[0],
        );
        Ok(components)
    }

    /// Fold one observation into the recursion and refresh the one-step
    /// forecast.
    pub(crate) fn observe(&mut self, y: f64) {
        let last_level = self.level;
        let last_base = self.base;
        let seasonal_idx = self.current_seasonal_index();
        let last_season = self.seasonal[seasonal_idx];

        let (new_level, new_base, new_season) = match self.seasonality {
            SeasonalityType::Multiplicative => {
                let level =
                    self.alpha * (y / last_season) + (1.0 - self.alpha) * (last_level + last_base);
                let base = self.beta * (level - last_level) + (1.0 - self.beta) * last_base;
                let season = self.gamma * (y / (last_level + last_base))
                    + (1.0 - self.gamma) * last_season;
                (level, base, season)
            }
            SeasonalityType::Additive => {
                let level =
                    self.alpha * (y - last_season) + (1.0 - self.alpha) * (last_level + last_base);
                let base = self.beta * (level - last_level) + (1.0 - self.beta) * last_base;
                let season = self.gamma * (y - (last_level - last_base))
                    + (1.0 - self.gamma) * last_season;
                (level, base, season)
            }
        };

        self.overall_stats.add(y);
        self.level = new_level;
        self.base = new_base;
        self.seasonal[seasonal_idx] = new_season;
        self.seasonal_stats[seasonal_idx].add(y);
        // Forecast the next tick with the seasonal component of the
        // season the index has now advanced to.
        self.forecast = self.combine(
            new_level,
            new_base,
            self.seasonal[self.current_seasonal_index()],
        );
    }

    fn combine(&self, level: f64, base: f64, season: f64) -> f64 {
        match self.seasonality {
            SeasonalityType::Multiplicative => (level + base) * season,
            SeasonalityType::Additive => level + base + season,
        }
    }

    /// Observations folded in so far.
    pub(crate) fn n(&self) -> u64 {
        self.overall_stats.n()
    }

    /// Index into the seasonal components; advances with each
    /// observation and wraps after one full cycle.
    pub(crate) fn current_seasonal_index(&self) -> usize {
        (self.n() % self.seasonal.len() as u64) as usize
    }

    pub(crate) fn seasonal_std_dev(&self, seasonal_idx: usize) -> f64 {
        self.seasonal_stats[seasonal_idx].std_dev()
    }

    pub(crate) fn level(&self) -> f64 {
        self.level
    }

    pub(crate) fn base(&self) -> f64 {
        self.base
    }

    pub(crate) fn seasonal(&self, seasonal_idx: usize) -> f64 {
        self.seasonal[seasonal_idx]
    }

    pub(crate) fn forecast(&self) -> f64 {
        self.forecast
    }

    pub(crate) fn set_level(&mut self, level: f64) {
        self.level = level;
    }

    pub(crate) fn set_base(&mut self, base: f64) {
        self.base = base;
    }

    pub(crate) fn set_seasonal(&mut self, seasonal_idx: usize, value: f64, observed: f64) {
        self.seasonal[seasonal_idx] = value;
        self.seasonal_stats[seasonal_idx].add(observed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detect_api::HoltWintersTrainingMethod;

    const TOLERANCE: f64 = 1e-9;

    fn config(seasonality: SeasonalityType) -> HoltWintersConfig {
        HoltWintersConfig {
            seasonality_type: seasonality,
            frequency: 4,
            alpha: 0.5,
            beta: 0.5,
            gamma: 0.5,
            init_training_method: HoltWintersTrainingMethod::None,
            ..Default::default()
        }
    }

    #[test]
    fn test_running_stats() {
        let mut stats = RunningStats::default();
        for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.add(value);
        }
        assert_eq!(stats.n(), 8);
        assert!((stats.mean - 5.0).abs() < TOLERANCE);
        // Sample stddev of the classic example set.
        assert!((stats.std_dev() - 2.138089935).abs() < 1e-6);
    }

    #[test]
    fn test_running_stats_degenerate() {
        let mut stats = RunningStats::default();
        assert_eq!(stats.std_dev(), 0.0);
        stats.add(3.0);
        assert_eq!(stats.std_dev(), 0.0);
    }

    #[test]
    fn test_identity_initialization() {
        let multiplicative = HoltWintersComponents::new(&config(SeasonalityType::Multiplicative))
            .unwrap();
        assert_eq!(multiplicative.level(), 1.0);
        assert_eq!(multiplicative.base(), 1.0);
        assert_eq!(multiplicative.seasonal(0), 1.0);
        // (level + base) * seasonal = 2.0
        assert!((multiplicative.forecast() - 2.0).abs() < TOLERANCE);

        let additive = HoltWintersComponents::new(&config(SeasonalityType::Additive)).unwrap();
        assert_eq!(additive.level(), 0.0);
        assert_eq!(additive.base(), 0.0);
        assert!((additive.forecast() - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_additive_recursion_step() {
        let mut components = HoltWintersComponents::new(&HoltWintersConfig {
            init_level_estimate: Some(10.0),
            init_base_estimate: Some(1.0),
            init_seasonal_estimates: vec![2.0, 0.0, -1.0, -1.0],
            ..config(SeasonalityType::Additive)
        })
        .unwrap();

        components.observe(14.0);

        // level' = 0.5*(14 - 2) + 0.5*(10 + 1) = 11.5
        // base'  = 0.5*(11.5 - 10) + 0.5*1 = 1.25
        // s'     = 0.5*(14 - (10 - 1)) + 0.5*2 = 3.5
        // forecast for the next tick uses the next season's component:
        // 11.5 + 1.25 + 0.0 = 12.75
        assert!((components.level() - 11.5).abs() < TOLERANCE);
        assert!((components.base() - 1.25).abs() < TOLERANCE);
        assert!((components.seasonal(0) - 3.5).abs() < TOLERANCE);
        assert!((components.forecast() - 12.75).abs() < TOLERANCE);
    }

    #[test]
    fn test_multiplicative_recursion_step() {
        let mut components = HoltWintersComponents::new(&HoltWintersConfig {
            init_level_estimate: Some(10.0),
            init_base_estimate: Some(1.0),
            init_seasonal_estimates: vec![2.0, 1.0, 0.5, 0.5],
            ..config(SeasonalityType::Multiplicative)
        })
        .unwrap();

        components.observe(22.0);

        // level' = 0.5*(22/2) + 0.5*(10 + 1) = 11.0
        // base'  = 0.5*(11 - 10) + 0.5*1 = 1.0
        // s'     = 0.5*(22/11) + 0.5*2 = 2.0
        // forecast for the next tick uses the next season's component:
        // (11 + 1) * 1.0 = 12.0
        assert!((components.level() - 11.0).abs() < TOLERANCE);
        assert!((components.base() - 1.0).abs() < TOLERANCE);
        assert!((components.seasonal(0) - 2.0).abs() < TOLERANCE);
        assert!((components.forecast() - 12.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_seasonal_index_wraps() {
        let mut components =
            HoltWintersComponents::new(&config(SeasonalityType::Additive)).unwrap();
        assert_eq!(components.current_seasonal_index(), 0);
        for i in 1..=5 {
            components.observe(i as f64);
        }
        assert_eq!(components.n(), 5);
        assert_eq!(components.current_seasonal_index(), 1);
    }
}
