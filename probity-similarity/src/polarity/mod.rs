//! Polarity opposition detection.
//!
//! Two paths, scored independently and combined by taking the stronger:
//! explicit negation ("attended" vs "did not attend") and curated
//! opposite phrases ("cooperated" vs "refused to cooperate").

pub mod antonyms;
pub mod negation;

use probity_core::config::SimilarityConfig;
use probity_core::constants::{ANTONYM_CONFIDENCE, NEGATION_CONFIDENCE};
use probity_core::models::{Opposition, OppositionPath};
use probity_core::traits::IPolarityDetector;

/// Stateless polarity opposition detector.
#[derive(Debug, Clone)]
pub struct PolarityDetector {
    negation_overlap: f64,
}

impl PolarityDetector {
    pub fn new(config: &SimilarityConfig) -> Self {
        Self {
            negation_overlap: config.negation_overlap,
        }
    }

    pub fn detect(&self, a: &str, b: &str) -> Opposition {
        let mut result = Opposition::none();
        if negation::is_negated_pair(a, b, self.negation_overlap) {
            result = result.max(Opposition::found(
                NEGATION_CONFIDENCE,
                OppositionPath::ExplicitNegation,
            ));
        }
        if antonyms::find_opposite_phrase(a, b).is_some() {
            result = result.max(Opposition::found(ANTONYM_CONFIDENCE, OppositionPath::Antonym));
        }
        result
    }
}

impl Default for PolarityDetector {
    fn default() -> Self {
        Self::new(&SimilarityConfig::default())
    }
}

impl IPolarityDetector for PolarityDetector {
    fn opposition(&self, a: &str, b: &str) -> Opposition {
        self.detect(a, b)
    }
}
