//! Integration tests for detect-core

use detect_api::{EwmaConfig, HoltWintersConfig, HoltWintersTrainingMethod, PewmaConfig, SeasonalityType};
use detect_core::{ForecastingDetector, HoltWintersDetector};
use detect_spi::{AnomalyLevel, Detector, DetectorResult, MetricPoint, TailType};

fn noisy_baseline(n: usize, center: f64) -> Vec<f64> {
    (0..n)
        .map(|i| center + if i % 2 == 0 { 0.2 } else { -0.2 })
        .collect()
}

#[test]
fn test_warm_up_property_holds_for_any_period() {
    for warm_up in [1usize, 5, 20] {
        let config = PewmaConfig {
            warm_up_period: warm_up,
            ..Default::default()
        };
        let mut detector = ForecastingDetector::pewma(&config, TailType::TwoTailed).unwrap();

        for i in 0..warm_up {
            let result = detector
                .classify(&MetricPoint::new("m", 10.0, i as i64))
                .unwrap();
            assert_eq!(
                result.level(),
                AnomalyLevel::ModelWarmup,
                "classification {i} of warm_up={warm_up}"
            );
        }
        let result = detector
            .classify(&MetricPoint::new("m", 10.0, warm_up as i64))
            .unwrap();
        assert_ne!(result.level(), AnomalyLevel::ModelWarmup);
    }
}

#[test]
fn test_ewma_detector_flags_spike_and_recovers() {
    let config = EwmaConfig {
        alpha: 0.2,
        init_mean_estimate: 50.0,
        ..Default::default()
    };
    let mut detector = ForecastingDetector::ewma(&config, TailType::TwoTailed).unwrap();

    for (i, value) in noisy_baseline(40, 50.0).iter().enumerate() {
        detector
            .classify(&MetricPoint::new("requests", *value, i as i64))
            .unwrap();
    }

    let spike = detector
        .classify(&MetricPoint::new("requests", 80.0, 40))
        .unwrap();
    assert_eq!(spike.level(), AnomalyLevel::Strong);

    // After the spike passes, the stream settles back to normal.
    let mut settled = false;
    for i in 0..40 {
        let value = 50.0 + if i % 2 == 0 { 0.2 } else { -0.2 };
        let result = detector
            .classify(&MetricPoint::new("requests", value, 41 + i))
            .unwrap();
        if result.level() == AnomalyLevel::Normal {
            settled = true;
        }
    }
    assert!(settled, "detector never recovered from the spike");
}

#[test]
fn test_ewma_detector_result_shape() {
    let config = EwmaConfig {
        init_mean_estimate: 10.0,
        ..Default::default()
    };
    let mut detector = ForecastingDetector::ewma(&config, TailType::TwoTailed).unwrap();

    let result = detector
        .classify(&MetricPoint::new("m", 10.0, 0))
        .unwrap();

    match result {
        DetectorResult::Outlier(outlier) => {
            let thresholds = outlier.thresholds.expect("thresholds");
            let predicted = outlier.predicted.expect("predicted");
            assert_eq!(predicted, 10.0);
            // All four bounds populated and ordered.
            assert!(thresholds.upper_strong().unwrap() >= thresholds.upper_weak().unwrap());
            assert!(thresholds.upper_weak().unwrap() >= thresholds.lower_weak().unwrap());
            assert!(thresholds.lower_weak().unwrap() >= thresholds.lower_strong().unwrap());
        }
        other => panic!("expected outlier result, got {other:?}"),
    }
}

#[test]
fn test_right_tailed_detector_ignores_drops() {
    let config = EwmaConfig {
        alpha: 0.2,
        init_mean_estimate: 50.0,
        ..Default::default()
    };
    let mut detector = ForecastingDetector::ewma(&config, TailType::RightTailed).unwrap();

    for (i, value) in noisy_baseline(40, 50.0).iter().enumerate() {
        detector
            .classify(&MetricPoint::new("m", *value, i as i64))
            .unwrap();
    }

    // A hard drop is invisible to a right-tailed detector.
    let drop = detector.classify(&MetricPoint::new("m", 20.0, 40)).unwrap();
    assert_eq!(drop.level(), AnomalyLevel::Normal);
}

#[test]
fn test_holt_winters_full_season_pipeline() {
    let config = HoltWintersConfig {
        seasonality_type: SeasonalityType::Multiplicative,
        frequency: 4,
        alpha: 0.441,
        beta: 0.030,
        gamma: 0.002,
        init_training_method: HoltWintersTrainingMethod::Simple,
        ..Default::default()
    };
    let mut detector = HoltWintersDetector::new(&config, TailType::TwoTailed).unwrap();

    let pattern = [30.0, 50.0, 40.0, 60.0];
    let mut live_normals = 0;
    for cycle in 0..6 {
        for (phase, base) in pattern.iter().enumerate() {
            let i = cycle * pattern.len() + phase;
            let result = detector
                .classify(&MetricPoint::new("seasonal", *base, i as i64 * 3600))
                .unwrap();
            if cycle < 2 {
                assert_eq!(result.level(), AnomalyLevel::ModelWarmup, "observation {i}");
            } else if result.level() == AnomalyLevel::Normal {
                live_normals += 1;
            }
        }
    }
    assert!(live_normals > 0, "no live classification came back normal");
}
