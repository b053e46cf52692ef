/// Similarity strategy errors. These never escape the estimator: a
/// failing strategy is skipped and the next one in the chain is tried.
#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    #[error("strategy unavailable: {strategy}")]
    StrategyUnavailable { strategy: String },

    #[error("{strategy} cannot score input: {reason}")]
    InsufficientInput { strategy: String, reason: String },

    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
