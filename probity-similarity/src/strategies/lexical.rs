//! Jaccard overlap of token sets. The last resort: always available,
//! never fails.

use std::collections::BTreeSet;

use probity_core::errors::ProbityResult;
use probity_core::models::SimilarityStrategyKind;
use probity_core::traits::ISimilarityStrategy;

use crate::text;

pub struct LexicalJaccardStrategy;

impl ISimilarityStrategy for LexicalJaccardStrategy {
    fn kind(&self) -> SimilarityStrategyKind {
        SimilarityStrategyKind::LexicalJaccard
    }

    fn is_available(&self) -> bool {
        true
    }

    fn score(&self, a: &str, b: &str) -> ProbityResult<f64> {
        Ok(jaccard_similarity(a, b))
    }
}

/// Jaccard over raw (unstemmed) token sets.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let sa: BTreeSet<String> = text::tokenize(a).into_iter().collect();
    let sb: BTreeSet<String> = text::tokenize(b).into_iter().collect();
    text::jaccard(&sa, &sb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_overlap() {
        // {a, b, c} vs {b, c, d}: 2 / 4
        assert_eq!(jaccard_similarity("a b c", "b c d"), 0.5);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(jaccard_similarity("", "..."), 0.0);
    }

    #[test]
    fn always_available() {
        assert!(LexicalJaccardStrategy.is_available());
    }
}
