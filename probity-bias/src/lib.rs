//! # probity-bias
//!
//! Statistical bias detection over document text and claim sets.
//!
//! - [`markers`]: six marker categories counted with word-bounded regexes
//! - [`zscore`]: document ratios compared to a baseline corpus
//! - [`attribution`]: 2x2 chi-square test of negative framing per entity
//! - [`report`]: case-level aggregation
//! - [`baseline`]: in-memory store, seed figures, calibration

pub mod attribution;
pub mod baseline;
pub mod engine;
pub mod markers;
pub mod report;
pub mod stats;
pub mod zscore;

pub use baseline::InMemoryBaselineStore;
pub use engine::BiasEngine;
pub use markers::BiasPatternMatcher;
