mod baseline_error;
mod config_error;
mod similarity_error;

pub use baseline_error::BaselineError;
pub use config_error::ConfigError;
pub use similarity_error::SimilarityError;

/// Top-level error for every fallible Probity operation.
#[derive(Debug, thiserror::Error)]
pub enum ProbityError {
    #[error("claim pair has identical identifiers: {claim_id}")]
    IdenticalClaimPair { claim_id: String },

    #[error("invalid claim {claim_id}: {reason}")]
    InvalidClaim { claim_id: String, reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Baseline(#[from] BaselineError),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}

/// Convenience alias used across the workspace.
pub type ProbityResult<T> = Result<T, ProbityError>;
