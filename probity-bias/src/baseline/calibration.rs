//! Derive baselines from measured samples.

use probity_core::errors::BaselineError;
use probity_core::models::{BaselineProvenance, BiasBaseline, BiasMetric};

use crate::markers::BiasPatternMatcher;

/// Fewest samples a sample standard deviation is defined for.
pub const MIN_CALIBRATION_SAMPLES: usize = 2;

/// Baseline from raw metric values: sample mean and sample standard
/// deviation (n - 1). Non-finite samples are ignored.
pub fn calibrate(
    document_type: &str,
    metric: BiasMetric,
    samples: &[f64],
) -> Result<BiasBaseline, BaselineError> {
    let values: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    let n = values.len();
    if n < MIN_CALIBRATION_SAMPLES {
        return Err(BaselineError::InsufficientSamples {
            needed: MIN_CALIBRATION_SAMPLES,
            actual: n,
        });
    }

    let n_f = n as f64;
    let mean = values.iter().sum::<f64>() / n_f;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n_f - 1.0);
    let std_dev = variance.sqrt();

    BiasBaseline::new(
        document_type,
        metric,
        mean,
        std_dev,
        u32::try_from(n).unwrap_or(u32::MAX),
        BaselineProvenance::Calibrated,
    )
}

/// Measure every metric over a document corpus and calibrate each one.
///
/// Documents where a metric is undefined contribute no sample to it.
/// Metrics that cannot be calibrated are skipped; the first such error is
/// returned only when no metric could be calibrated.
pub fn calibrate_from_documents(
    document_type: &str,
    documents: &[&str],
) -> Result<Vec<BiasBaseline>, BaselineError> {
    let matcher = BiasPatternMatcher::new();
    let counts: Vec<_> = documents.iter().map(|text| matcher.count(text)).collect();

    let mut baselines = Vec::new();
    let mut first_error = None;
    for metric in BiasMetric::ALL {
        let samples: Vec<f64> = counts.iter().filter_map(|c| c.ratio(metric)).collect();
        match calibrate(document_type, metric, &samples) {
            Ok(baseline) => baselines.push(baseline),
            Err(err) => {
                tracing::debug!(
                    document_type = %document_type,
                    metric = %metric,
                    error = %err,
                    "metric not calibrated"
                );
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) if baselines.is_empty() => Err(err),
        _ => Ok(baselines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_standard_deviation() {
        let baseline = calibrate("general", BiasMetric::CertaintyRatio, &[0.2, 0.4, 0.6]).unwrap();
        assert!((baseline.mean - 0.4).abs() < 1e-12);
        assert!((baseline.std_dev - 0.2).abs() < 1e-12);
        assert_eq!(baseline.corpus_size, 3);
        assert_eq!(baseline.provenance, BaselineProvenance::Calibrated);
    }

    #[test]
    fn single_sample_is_rejected() {
        let err = calibrate("general", BiasMetric::CertaintyRatio, &[0.5]).unwrap_err();
        assert!(matches!(
            err,
            BaselineError::InsufficientSamples { needed: 2, actual: 1 }
        ));
    }

    #[test]
    fn identical_samples_have_no_spread() {
        let err = calibrate("general", BiasMetric::CertaintyRatio, &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, BaselineError::NonPositiveStdDev { .. }));
    }

    #[test]
    fn documents_without_markers_are_not_calibrated() {
        let result = calibrate_from_documents("general", &["The hearing was on Monday."]);
        assert!(result.is_err());
    }

    #[test]
    fn corpus_calibration_skips_undefined_metrics() {
        let docs = [
            "He was clearly hostile. It may be so.",
            "She was possibly hostile but warm.",
            "Obviously and certainly he was caring. Perhaps.",
        ];
        let baselines = calibrate_from_documents("police_report", &docs).unwrap();
        let metrics: Vec<_> = baselines.iter().map(|b| b.metric).collect();
        assert!(metrics.contains(&BiasMetric::CertaintyRatio));
        assert!(metrics.contains(&BiasMetric::NegativeRatio));
        assert!(!metrics.contains(&BiasMetric::ExtremeRatio));
    }
}
