//! EDM-X breakout estimation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::running_median::RunningMedian;
use detect_spi::{BreakoutEstimate, DetectError, Result};

/// Runs EDM-X over `data`, scaling it to `[0, 1]` first.
///
/// `delta` is the minimum sample size for computing a median, on both
/// sides of a candidate split. The permutation test reshuffles the
/// scaled data `num_perms` times with `rng`; the reported significance
/// compares the Laplace-corrected p-value against `alpha`.
pub fn estimate(
    data: &[f64],
    delta: usize,
    num_perms: usize,
    alpha: f64,
    rng: &mut impl Rng,
) -> Result<BreakoutEstimate> {
    let scaled = unit_scale(data);
    let breakout = estimate_simple_breakout(&scaled, delta)?;
    let p_value = estimate_p_value(&scaled, delta, num_perms, breakout.energy_distance, rng)?;

    Ok(BreakoutEstimate::new(
        breakout.location,
        breakout.energy_distance,
        breakout.pre_median,
        breakout.post_median,
        p_value,
        alpha,
    ))
}

/// Best split location and statistic, without significance testing.
#[derive(Debug, Clone, Copy)]
struct SimpleBreakout {
    location: Option<usize>,
    energy_distance: f64,
    pre_median: f64,
    post_median: f64,
}

/// Scans every candidate split `i` and right-subwindow end `j`,
/// maintaining the left median incrementally as `i` grows and the right
/// median incrementally as `j` grows (reset per `i`). The running-median
/// structure keeps each inner step O(log n) instead of O(n).
fn estimate_simple_breakout(data: &[f64], delta: usize) -> Result<SimpleBreakout> {
    if delta == 0 {
        return Err(DetectError::invalid_parameter("delta", "must be > 0"));
    }
    let n = data.len();
    if n < 2 * delta {
        return Err(DetectError::InsufficientData {
            required: 2 * delta,
            actual: n,
        });
    }

    let mut best_location = None;
    let mut best_stat = 0.0f64;
    let mut best_pre_median = 0.0;
    let mut best_post_median = 0.0;

    let mut left = RunningMedian::new();
    for value in &data[..delta - 1] {
        left.add(*value);
    }
    for i in delta..=(n - delta) {
        left.add(data[i - 1]);
        let pre_median = left.median();

        let mut right = RunningMedian::new();
        for value in &data[i..i + delta - 1] {
            right.add(*value);
        }
        for j in (i + delta)..=n {
            right.add(data[j - 1]);
            let post_median = right.median();
            let diff = pre_median - post_median;

            // Multiply before dividing so the integer factors never
            // truncate each other.
            let stat = diff * diff * i as f64 * (j - i) as f64 / j as f64;

            if stat > best_stat {
                best_location = Some(i);
                best_stat = stat;
                best_pre_median = pre_median;
                best_post_median = post_median;
            }
        }
    }

    Ok(SimpleBreakout {
        location: best_location,
        energy_distance: best_stat,
        pre_median: best_pre_median,
        post_median: best_post_median,
    })
}

/// Permutation test: the share of `num_perms` reshuffles whose best
/// statistic reaches the observed one. Laplace-corrected (the observed
/// arrangement counts as one permutation), so a finite test never
/// reports exactly zero.
fn estimate_p_value(
    data: &[f64],
    delta: usize,
    num_perms: usize,
    test_stat: f64,
    rng: &mut impl Rng,
) -> Result<f64> {
    let mut permuted = data.to_vec();
    let mut num_greater = 0usize;

    for _ in 0..num_perms {
        permuted.shuffle(rng);
        let perm_estimate = estimate_simple_breakout(&permuted, delta)?;
        if perm_estimate.energy_distance >= test_stat {
            num_greater += 1;
        }
    }

    Ok((num_greater + 1) as f64 / (num_perms + 1) as f64)
}

/// Scales the data to `[0, 1]`, per the appendix of the paper. A
/// zero-range series divides by 1 instead.
fn unit_scale(data: &[f64]) -> Vec<f64> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let denom = if range == 0.0 { 1.0 } else { range };
    data.iter().map(|value| (value - min) / denom).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOLERANCE: f64 = 1e-9;

    fn step_series() -> Vec<f64> {
        let mut data = vec![0.0; 12];
        data.extend(vec![10.0; 12]);
        data
    }

    #[test]
    fn test_unit_scale() {
        let scaled = unit_scale(&[5.0, 10.0, 7.5]);
        assert!((scaled[0] - 0.0).abs() < TOLERANCE);
        assert!((scaled[1] - 1.0).abs() < TOLERANCE);
        assert!((scaled[2] - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_unit_scale_zero_range() {
        let scaled = unit_scale(&[3.0, 3.0, 3.0]);
        assert!(scaled.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_simple_breakout_finds_step() {
        let breakout = estimate_simple_breakout(&unit_scale(&step_series()), 6).unwrap();
        assert_eq!(breakout.location, Some(12));
        assert!(breakout.energy_distance > 0.0);
        assert!((breakout.pre_median - 0.0).abs() < TOLERANCE);
        assert!((breakout.post_median - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_constant_series_has_no_breakout() {
        let breakout = estimate_simple_breakout(&vec![0.5; 20], 4).unwrap();
        assert_eq!(breakout.location, None);
        assert_eq!(breakout.energy_distance, 0.0);
    }

    #[test]
    fn test_rejects_short_series() {
        let result = estimate_simple_breakout(&[1.0, 2.0, 3.0], 2);
        assert!(matches!(
            result,
            Err(DetectError::InsufficientData {
                required: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_rejects_zero_delta() {
        let result = estimate_simple_breakout(&[1.0, 2.0, 3.0, 4.0], 0);
        assert!(matches!(result, Err(DetectError::InvalidParameter { .. })));
    }

    #[test]
    fn test_p_value_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for num_perms in [0, 1, 10, 99] {
            let estimate = estimate(&step_series(), 6, num_perms, 0.05, &mut rng).unwrap();
            assert!(estimate.p_value > 0.0, "p-value can never reach zero");
            assert!(estimate.p_value <= 1.0);
        }
    }

    #[test]
    fn test_zero_perms_p_value_is_one() {
        // With no permutations there is no evidence of significance.
        let mut rng = StdRng::seed_from_u64(7);
        let estimate = estimate(&step_series(), 6, 0, 0.05, &mut rng).unwrap();
        assert_eq!(estimate.p_value, 1.0);
        assert!(!estimate.significant);
    }

    #[test]
    fn test_step_function_is_significant() {
        let mut rng = StdRng::seed_from_u64(42);
        let estimate = estimate(&step_series(), 6, 99, 0.05, &mut rng).unwrap();

        assert_eq!(estimate.location, Some(12));
        assert!(estimate.significant);
        assert!(estimate.p_value <= 0.05);
    }

    #[test]
    fn test_seeded_estimates_are_reproducible() {
        let noisy: Vec<f64> = (0..24)
            .map(|i| if i < 12 { (i % 3) as f64 } else { 8.0 + (i % 3) as f64 })
            .collect();

        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);
        let a = estimate(&noisy, 6, 50, 0.05, &mut rng_a).unwrap();
        let b = estimate(&noisy, 6, 50, 0.05, &mut rng_b).unwrap();

        assert_eq!(a, b);
    }
}
