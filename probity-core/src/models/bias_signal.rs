use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::baseline::{BaselineKey, BaselineSnapshot, BiasMetric};
use super::severity::Severity;

/// Kind of bias a signal reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasSignalType {
    CertaintyLanguage,
    NegativeAttribution,
    QuantifierExtremity,
    AttributionAsymmetry,
}

impl BiasSignalType {
    pub fn as_str(self) -> &'static str {
        match self {
            BiasSignalType::CertaintyLanguage => "certainty_language",
            BiasSignalType::NegativeAttribution => "negative_attribution",
            BiasSignalType::QuantifierExtremity => "quantifier_extremity",
            BiasSignalType::AttributionAsymmetry => "attribution_asymmetry",
        }
    }

    /// Signal type emitted for a document metric.
    pub fn for_metric(metric: BiasMetric) -> Self {
        match metric {
            BiasMetric::CertaintyRatio => BiasSignalType::CertaintyLanguage,
            BiasMetric::NegativeRatio => BiasSignalType::NegativeAttribution,
            BiasMetric::ExtremeRatio => BiasSignalType::QuantifierExtremity,
        }
    }
}

impl fmt::Display for BiasSignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the baseline the observation falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    pub fn of(z_score: f64) -> Self {
        if z_score < 0.0 {
            Direction::Lower
        } else {
            Direction::Higher
        }
    }
}

/// A statistically anomalous linguistic pattern. Created per analysis
/// run and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasSignal {
    pub id: String,
    pub case_id: String,
    pub document_id: Option<String>,
    pub entity_id: Option<String>,
    pub signal_type: BiasSignalType,
    pub metric: Option<BiasMetric>,
    pub observed_value: f64,
    pub baseline: BaselineSnapshot,
    /// Reference to the stored baseline used; `None` when the comparison
    /// group was derived from the claims themselves.
    pub baseline_key: Option<BaselineKey>,
    pub z_score: f64,
    pub p_value: Option<f64>,
    /// Cramér's V for chi-square signals.
    pub effect_size: Option<f64>,
    pub sample_size: usize,
    pub direction: Direction,
    pub severity: Severity,
    pub description: String,
    pub detected_at: DateTime<Utc>,
}
