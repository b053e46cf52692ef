//! ContradictionEngine: validates input, builds the claim index, runs the
//! classifiers and aggregates a report.

use std::sync::Arc;

use probity_core::config::ContradictionConfig;
use probity_core::errors::{ProbityError, ProbityResult};
use probity_core::models::{
    Claim, Contradiction, ContradictionReport, Severity, SimilarityStrategyKind,
};
use probity_core::traits::{IPolarityDetector, ISimilarityScorer};
use probity_observability::{comparison_span, detection_span, events};
use tracing::debug;

use crate::aggregator;
use crate::detection::{self, DetectionContext};
use crate::index::ClaimIndex;

/// Runs the eight contradiction classifiers over a claim set.
///
/// The engine holds no per-run state; one instance can serve many cases
/// concurrently.
pub struct ContradictionEngine {
    config: ContradictionConfig,
    scorer: Arc<dyn ISimilarityScorer>,
    polarity: Arc<dyn IPolarityDetector>,
}

impl ContradictionEngine {
    pub fn new(
        config: ContradictionConfig,
        scorer: Arc<dyn ISimilarityScorer>,
        polarity: Arc<dyn IPolarityDetector>,
    ) -> ProbityResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scorer,
            polarity,
        })
    }

    pub fn config(&self) -> &ContradictionConfig {
        &self.config
    }

    /// Analyse every claim pair of a case.
    pub fn detect_contradictions(
        &self,
        claims: &[Claim],
        case_id: &str,
    ) -> ProbityResult<ContradictionReport> {
        let span = detection_span!(case_id, claims.len());
        let _guard = span.enter();

        for claim in claims {
            claim.validate()?;
        }

        let batches = self.run(claims, case_id);
        let report = aggregator::build_report(case_id, claims.len(), batches);

        for c in &report.contradictions {
            events::contradiction_detected(c);
        }
        events::detection_completed(
            case_id,
            claims.len(),
            report.summary.total,
            report.summary.count_of_severity(Severity::Critical),
        );
        Ok(report)
    }

    /// Classify a single pair. Returns the one finding that survives
    /// deduplication, if any.
    pub fn compare_claims(
        &self,
        a: &Claim,
        b: &Claim,
        case_id: &str,
    ) -> ProbityResult<Option<Contradiction>> {
        if a.id == b.id {
            return Err(ProbityError::IdenticalClaimPair {
                claim_id: a.id.clone(),
            });
        }
        a.validate()?;
        b.validate()?;

        let span = comparison_span!(a.id, b.id);
        let _guard = span.enter();

        let pair = [a.clone(), b.clone()];
        let merged = aggregator::merge(self.run(&pair, case_id));
        let found = merged.into_iter().next();
        if let Some(c) = &found {
            events::contradiction_detected(c);
        }
        Ok(found)
    }

    /// Token blocking is skipped while scores come from embeddings.
    fn topic_blocking(&self) -> bool {
        self.config.topic_blocking
            && self.scorer.scoring_strategy() != Some(SimilarityStrategyKind::Embedding)
    }

    fn run(&self, claims: &[Claim], case_id: &str) -> Vec<Vec<Contradiction>> {
        let index = ClaimIndex::build(claims, self.topic_blocking());
        debug!(
            authors = index.by_author.len(),
            dated = index.temporal.len(),
            quoted = index.quotes.len(),
            "claim index built"
        );
        let ctx = DetectionContext {
            case_id,
            claims,
            index: &index,
            scorer: self.scorer.as_ref(),
            polarity: self.polarity.as_ref(),
            config: &self.config,
        };
        detection::detect_all(&ctx)
    }
}
