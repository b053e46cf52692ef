//! Similarity strategies, in fallback priority order.

pub mod embedding;
pub mod fuzzy;
pub mod lexical;

pub use embedding::EmbeddingStrategy;
pub use fuzzy::FuzzyTokenStrategy;
pub use lexical::LexicalJaccardStrategy;
