//! Entity attribution asymmetry.
//!
//! Tests whether claims about one entity are framed negatively more often
//! than claims about everyone else in the same set.

use chrono::Utc;
use probity_core::config::BiasConfig;
use probity_core::models::{
    BaselineSnapshot, BiasSignal, BiasSignalType, Claim, Direction, Severity,
};
use uuid::Uuid;

use crate::markers::{BiasPatternMatcher, Sentiment};
use crate::stats::{self, ContingencyTable};

pub struct EntityAttributionAnalyzer<'a> {
    config: &'a BiasConfig,
    matcher: BiasPatternMatcher,
}

impl<'a> EntityAttributionAnalyzer<'a> {
    pub fn new(config: &'a BiasConfig) -> Self {
        Self {
            config,
            matcher: BiasPatternMatcher::new(),
        }
    }

    /// Sentiment-by-subject table. Neutral claims contribute nothing.
    pub fn table(&self, claims: &[Claim], entity_id: &str) -> ContingencyTable {
        let mut table = ContingencyTable::default();
        for claim in claims {
            let Some(sentiment) = self.matcher.sentiment(&claim.text) else {
                continue;
            };
            let slot = match (claim.is_about(entity_id), sentiment) {
                (true, Sentiment::Negative) => &mut table.a,
                (true, Sentiment::Positive) => &mut table.b,
                (false, Sentiment::Negative) => &mut table.c,
                (false, Sentiment::Positive) => &mut table.d,
            };
            *slot += 1;
        }
        table
    }

    pub fn analyse(&self, claims: &[Claim], entity_id: &str, case_id: &str) -> Option<BiasSignal> {
        let table = self.table(claims, entity_id);
        let n = table.n();
        if n < self.config.min_sample_size {
            tracing::debug!(entity_id = %entity_id, n, "attribution sample too small");
            return None;
        }
        let chi2 = table.chi_square()?;
        let p = stats::chi_square_p(chi2, self.config.p_value_method)?;
        let v = stats::cramers_v(chi2, n);
        if !p.is_below(self.config.significance_level) || v <= self.config.min_effect_size {
            return None;
        }

        let observed = table.target_share();
        let comparison = table.others_share();
        let magnitude = chi2.sqrt();
        let z = stats::round_to(
            if observed < comparison { -magnitude } else { magnitude },
            probity_core::constants::Z_SCORE_PRECISION,
        );
        let direction = Direction::of(z);
        let severity = if z.abs() >= self.config.z_critical_threshold {
            Severity::High
        } else {
            Severity::Medium
        };
        let others = table.c + table.d;

        Some(BiasSignal {
            id: Uuid::new_v4().to_string(),
            case_id: case_id.to_string(),
            document_id: None,
            entity_id: Some(entity_id.to_string()),
            signal_type: BiasSignalType::AttributionAsymmetry,
            metric: None,
            observed_value: observed,
            baseline: BaselineSnapshot {
                mean: comparison,
                std_dev: (comparison * (1.0 - comparison) / others as f64).sqrt(),
                corpus_size: u32::try_from(others).unwrap_or(u32::MAX),
            },
            baseline_key: None,
            z_score: z,
            p_value: Some(p.value),
            effect_size: Some(v),
            sample_size: n,
            direction,
            severity,
            description: format!(
                "{:.0}% of sentiment-bearing claims about {} are negative against {:.0}% for others (chi2 = {:.2}, V = {:.2})",
                observed * 100.0,
                entity_id,
                comparison * 100.0,
                chi2,
                v
            ),
            detected_at: Utc::now(),
        })
    }
}
