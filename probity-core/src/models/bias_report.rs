use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bias_signal::BiasSignalType;
use super::severity::Severity;

/// Overall bias assessment for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasLevel {
    None,
    Low,
    Moderate,
    High,
}

/// Aggregate view over a case's bias signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReportSummary {
    pub case_id: String,
    pub total_signals: usize,
    pub by_type: BTreeMap<BiasSignalType, usize>,
    pub by_severity: BTreeMap<Severity, usize>,
    pub documents_flagged: Vec<String>,
    pub entities_flagged: Vec<String>,
    pub max_abs_z_score: Option<f64>,
    pub strongest_signal_id: Option<String>,
    pub level: BiasLevel,
}
