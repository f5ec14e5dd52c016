//! Minimal end-to-end run of an EWMA detector over a synthetic stream.

use detect_facade::{
    AnomalyLevel, Detector, DetectorResult, EwmaConfig, ForecastingDetector, MetricPoint, TailType,
};

fn main() -> detect_facade::Result<()> {
    let config = EwmaConfig {
        alpha: 0.2,
        init_mean_estimate: 100.0,
        ..Default::default()
    };
    let mut detector = ForecastingDetector::ewma(&config, TailType::TwoTailed)?;

    // Steady traffic with one spike in the middle.
    let values: Vec<f64> = (0..60)
        .map(|i| {
            if i == 45 {
                180.0
            } else {
                100.0 + if i % 2 == 0 { 1.5 } else { -1.5 }
            }
        })
        .collect();

    for (i, value) in values.iter().enumerate() {
        let point = MetricPoint::new("requests.per_second", *value, 60 * i as i64);
        let result = detector.classify(&point)?;

        if let DetectorResult::Outlier(outlier) = &result {
            if outlier.level != AnomalyLevel::Normal {
                println!(
                    "t={:>4} value={:>6.1} predicted={:>6.1} level={:?}",
                    point.timestamp(),
                    point.value(),
                    outlier.predicted.unwrap_or(f64::NAN),
                    outlier.level
                );
            }
        }
    }

    Ok(())
}
