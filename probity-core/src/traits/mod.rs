mod baseline_store;
mod embedding;
mod polarity;
mod similarity;

pub use baseline_store::IBaselineStore;
pub use embedding::IEmbeddingProvider;
pub use polarity::IPolarityDetector;
pub use similarity::{ISimilarityScorer, ISimilarityStrategy};
