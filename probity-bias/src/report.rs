//! Case-level aggregation of bias signals.

use std::collections::BTreeSet;

use probity_core::models::{BiasLevel, BiasReportSummary, BiasSignal, Severity};

/// Overall level: two HIGH signals make HIGH; one HIGH or three MEDIUM
/// make MODERATE; anything else present is LOW.
pub fn bias_level(signals: &[BiasSignal]) -> BiasLevel {
    let high = signals.iter().filter(|s| s.severity == Severity::High).count();
    let medium = signals
        .iter()
        .filter(|s| s.severity == Severity::Medium)
        .count();

    if high >= 2 {
        BiasLevel::High
    } else if high >= 1 || medium >= 3 {
        BiasLevel::Moderate
    } else if !signals.is_empty() {
        BiasLevel::Low
    } else {
        BiasLevel::None
    }
}

pub fn build_summary(signals: &[BiasSignal], case_id: &str) -> BiasReportSummary {
    let mut summary = BiasReportSummary {
        case_id: case_id.to_string(),
        total_signals: signals.len(),
        by_type: Default::default(),
        by_severity: Default::default(),
        documents_flagged: Vec::new(),
        entities_flagged: Vec::new(),
        max_abs_z_score: None,
        strongest_signal_id: None,
        level: bias_level(signals),
    };
    let mut documents = BTreeSet::new();
    let mut entities = BTreeSet::new();
    let mut strongest: Option<&BiasSignal> = None;

    for signal in signals {
        *summary.by_type.entry(signal.signal_type).or_default() += 1;
        *summary.by_severity.entry(signal.severity).or_default() += 1;
        if let Some(document_id) = &signal.document_id {
            documents.insert(document_id.clone());
        }
        if let Some(entity_id) = &signal.entity_id {
            entities.insert(entity_id.clone());
        }
        if strongest.map_or(true, |s| signal.z_score.abs() > s.z_score.abs()) {
            strongest = Some(signal);
        }
    }

    summary.documents_flagged = documents.into_iter().collect();
    summary.entities_flagged = entities.into_iter().collect();
    summary.max_abs_z_score = strongest.map(|s| s.z_score.abs());
    summary.strongest_signal_id = strongest.map(|s| s.id.clone());
    summary
}
