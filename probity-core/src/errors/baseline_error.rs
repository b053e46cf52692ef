/// Baseline corpus errors.
#[derive(Debug, thiserror::Error)]
pub enum BaselineError {
    #[error("baseline {document_type}/{metric}: standard deviation must be positive, got {std_dev}")]
    NonPositiveStdDev {
        document_type: String,
        metric: String,
        std_dev: f64,
    },

    #[error("baseline {document_type}/{metric}: mean must be finite, got {mean}")]
    InvalidMean {
        document_type: String,
        metric: String,
        mean: f64,
    },

    #[error("baseline {document_type}/{metric}: corpus size must be non-zero")]
    EmptyCorpus {
        document_type: String,
        metric: String,
    },

    #[error("calibration needs at least {needed} samples, got {actual}")]
    InsufficientSamples { needed: usize, actual: usize },
}
