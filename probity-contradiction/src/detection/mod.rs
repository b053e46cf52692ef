//! Contradiction classifier registry.
//!
//! Eight independent classifiers, each a free `detect` function over a
//! shared [`DetectionContext`]. Registry order is also the
//! deduplication priority order.

pub mod attribution;
pub mod direct;
pub mod modality_shift;
pub mod omission;
pub mod quotation;
pub mod self_contradiction;
pub mod temporal;
pub mod value;

use probity_core::config::ContradictionConfig;
use probity_core::models::{
    Claim, Contradiction, ContradictionType, DetectionMethod, Severity, SimilarityScore,
};
use probity_core::traits::{IPolarityDetector, ISimilarityScorer};
use probity_observability::events;
use rayon::prelude::*;

use crate::index::{ClaimIdx, ClaimIndex};

/// Everything a classifier may read. Nothing here is mutated during a run.
pub struct DetectionContext<'a> {
    pub case_id: &'a str,
    pub claims: &'a [Claim],
    pub index: &'a ClaimIndex,
    pub scorer: &'a dyn ISimilarityScorer,
    pub polarity: &'a dyn IPolarityDetector,
    pub config: &'a ContradictionConfig,
}

impl DetectionContext<'_> {
    pub fn claim(&self, i: ClaimIdx) -> &Claim {
        &self.claims[i]
    }

    pub fn similarity(&self, i: ClaimIdx, j: ClaimIdx) -> SimilarityScore {
        self.scorer
            .similarity(&self.claims[i].text, &self.claims[j].text)
    }

    /// Build a finding, dropping (and logging) pairs that cannot form one.
    pub(crate) fn finding(
        &self,
        (i, j): (ClaimIdx, ClaimIdx),
        severity: Severity,
        similarity: SimilarityScore,
        confidence: f64,
        method: DetectionMethod,
    ) -> Option<Contradiction> {
        let classifier = method.classifier;
        match Contradiction::new(
            self.case_id,
            &self.claims[i],
            &self.claims[j],
            severity,
            similarity.score,
            confidence,
            method,
        ) {
            Ok(c) => Some(c),
            Err(e) => {
                events::comparison_skipped(classifier.as_str(), &e.to_string());
                None
            }
        }
    }
}

pub type DetectorFn = fn(&DetectionContext<'_>) -> Vec<Contradiction>;

/// Classifiers in deduplication priority order.
pub const DETECTORS: [(ContradictionType, DetectorFn); 8] = [
    (ContradictionType::SelfContradiction, self_contradiction::detect),
    (ContradictionType::ModalityShift, modality_shift::detect),
    (ContradictionType::Temporal, temporal::detect),
    (ContradictionType::Value, value::detect),
    (ContradictionType::Attribution, attribution::detect),
    (ContradictionType::Direct, direct::detect),
    (ContradictionType::Quotation, quotation::detect),
    (ContradictionType::Omission, omission::detect),
];

/// Run every classifier. One output batch per classifier, in registry
/// order, whether or not they ran in parallel.
pub fn detect_all(ctx: &DetectionContext<'_>) -> Vec<Vec<Contradiction>> {
    if ctx.config.parallel {
        DETECTORS
            .par_iter()
            .map(|(_, detect)| detect(ctx))
            .collect()
    } else {
        DETECTORS.iter().map(|(_, detect)| detect(ctx)).collect()
    }
}
