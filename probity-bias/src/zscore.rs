//! Document-level marker ratios compared against the baseline corpus.

use chrono::Utc;
use probity_core::config::BiasConfig;
use probity_core::models::{BiasMetric, BiasSignal, BiasSignalType, Direction};
use probity_core::traits::IBaselineStore;
use uuid::Uuid;

use crate::baseline::resolve_baseline;
use crate::markers::BiasPatternMatcher;
use crate::stats;

/// One metric measured in a document, before thresholding.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricObservation {
    pub metric: BiasMetric,
    pub observed_value: f64,
    /// Marker occurrences in the ratio's denominator.
    pub sample_size: usize,
}

pub struct ZScoreAnalyzer<'a> {
    config: &'a BiasConfig,
    matcher: BiasPatternMatcher,
}

impl<'a> ZScoreAnalyzer<'a> {
    pub fn new(config: &'a BiasConfig) -> Self {
        Self {
            config,
            matcher: BiasPatternMatcher::new(),
        }
    }

    /// Every metric whose ratio is defined for `text`.
    pub fn observe(&self, text: &str) -> Vec<MetricObservation> {
        let counts = self.matcher.count(text);
        BiasMetric::ALL
            .into_iter()
            .filter_map(|metric| {
                let observed_value = counts.ratio(metric)?;
                Some(MetricObservation {
                    metric,
                    observed_value,
                    sample_size: counts.parts(metric).1,
                })
            })
            .collect()
    }

    /// Signals for every metric at or beyond the warning threshold.
    /// Metrics with no ratio or no baseline are skipped.
    pub fn analyse(
        &self,
        store: &dyn IBaselineStore,
        document_id: &str,
        document_type: &str,
        text: &str,
        case_id: &str,
    ) -> Vec<BiasSignal> {
        let fallback = self.config.fallback_document_type.as_deref();
        let mut signals = Vec::new();

        for observation in self.observe(text) {
            let Some(baseline) =
                resolve_baseline(store, document_type, observation.metric, fallback)
            else {
                tracing::debug!(
                    document_type = %document_type,
                    metric = %observation.metric,
                    "no baseline, metric skipped"
                );
                continue;
            };

            let z = stats::z_score(observation.observed_value, baseline.mean, baseline.std_dev);
            if !z.is_finite() {
                continue;
            }
            let Some(severity) = stats::severity_for(z.abs(), self.config) else {
                continue;
            };
            let direction = Direction::of(z);
            let p_value = stats::two_tailed_p(z, self.config.p_value_method);

            signals.push(BiasSignal {
                id: Uuid::new_v4().to_string(),
                case_id: case_id.to_string(),
                document_id: Some(document_id.to_string()),
                entity_id: None,
                signal_type: BiasSignalType::for_metric(observation.metric),
                metric: Some(observation.metric),
                observed_value: observation.observed_value,
                baseline: baseline.snapshot(),
                baseline_key: Some(baseline.key()),
                z_score: z,
                p_value: p_value.map(|p| p.value),
                effect_size: None,
                sample_size: observation.sample_size,
                direction,
                severity,
                description: format!(
                    "{} {:.3} is {} than the {} baseline {:.3} (z = {:.2})",
                    observation.metric,
                    observation.observed_value,
                    match direction {
                        Direction::Higher => "higher",
                        Direction::Lower => "lower",
                    },
                    baseline.document_type,
                    baseline.mean,
                    z
                ),
                detected_at: Utc::now(),
            });
        }

        signals
    }
}
