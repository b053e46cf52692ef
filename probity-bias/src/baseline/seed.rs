//! Estimated seed baselines.
//!
//! Figures are estimates for common document types pending calibration
//! against a real corpus; every seed carries `Estimated` provenance.

use chrono::Utc;
use probity_core::constants::GENERAL_DOCUMENT_TYPE;
use probity_core::models::{BaselineProvenance, BiasBaseline, BiasMetric};

/// Nominal corpus size recorded against estimated figures.
const ESTIMATED_CORPUS_SIZE: u32 = 50;

/// (document type, [certainty, negative, extreme] as (mean, std_dev)).
const SEEDS: &[(&str, [(f64, f64); 3])] = &[
    (GENERAL_DOCUMENT_TYPE, [(0.40, 0.15), (0.45, 0.15), (0.30, 0.12)]),
    ("social_work_assessment", [(0.35, 0.12), (0.50, 0.15), (0.25, 0.10)]),
    ("police_report", [(0.55, 0.15), (0.55, 0.15), (0.30, 0.12)]),
    ("expert_report", [(0.30, 0.10), (0.40, 0.12), (0.20, 0.08)]),
    ("witness_statement", [(0.45, 0.18), (0.50, 0.18), (0.35, 0.15)]),
    ("court_judgment", [(0.50, 0.12), (0.40, 0.12), (0.25, 0.10)]),
];

pub fn default_baselines() -> Vec<BiasBaseline> {
    let now = Utc::now();
    SEEDS
        .iter()
        .flat_map(|(document_type, figures)| {
            BiasMetric::ALL
                .iter()
                .zip(figures.iter())
                .map(move |(metric, (mean, std_dev))| BiasBaseline {
                    document_type: (*document_type).to_string(),
                    metric: *metric,
                    mean: *mean,
                    std_dev: *std_dev,
                    corpus_size: ESTIMATED_CORPUS_SIZE,
                    provenance: BaselineProvenance::Estimated,
                    updated_at: now,
                })
        })
        .collect()
}
