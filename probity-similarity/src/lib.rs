//! # probity-similarity
//!
//! Text similarity and polarity primitives shared by the contradiction
//! engine.
//!
//! ## Similarity chain
//! 1. **Embedding**: cosine of host-supplied dense vectors
//! 2. **Fuzzy token**: token-sort Levenshtein ratio
//! 3. **Lexical Jaccard**: token set overlap, always available
//!
//! The first available strategy that scores wins; the strategy used is
//! recorded with every score.

pub mod cache;
pub mod engine;
pub mod polarity;
pub mod strategies;
pub mod text;

pub use engine::SimilarityEstimator;
pub use polarity::PolarityDetector;
