use crate::errors::ProbityResult;
use crate::models::{SimilarityScore, SimilarityStrategyKind};

/// One link in the similarity fallback chain.
pub trait ISimilarityStrategy: Send + Sync {
    fn kind(&self) -> SimilarityStrategyKind;

    /// Whether the resources this strategy needs are present.
    fn is_available(&self) -> bool;

    /// Score two texts in [0, 1]. An error means "try the next strategy".
    fn score(&self, a: &str, b: &str) -> ProbityResult<f64>;
}

/// Anything that can score textual similarity. Implemented by the
/// estimator; tests substitute fixed scorers.
pub trait ISimilarityScorer: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> SimilarityScore;

    /// The strategy new scores will come from, when known.
    fn scoring_strategy(&self) -> Option<SimilarityStrategyKind> {
        None
    }
}
