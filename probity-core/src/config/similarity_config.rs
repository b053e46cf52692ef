use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Similarity estimator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Cache pairwise scores across comparisons.
    pub cache_enabled: bool,
    /// Max cached pairs.
    pub cache_size: u64,
    /// Texts longer than this (chars) skip the fuzzy strategy.
    pub fuzzy_max_chars: usize,
    /// Minimum stemmed-content overlap for the explicit-negation path.
    pub negation_overlap: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            cache_enabled: defaults::DEFAULT_SIMILARITY_CACHE_ENABLED,
            cache_size: defaults::DEFAULT_SIMILARITY_CACHE_SIZE,
            fuzzy_max_chars: defaults::DEFAULT_FUZZY_MAX_CHARS,
            negation_overlap: defaults::DEFAULT_NEGATION_OVERLAP,
        }
    }
}

impl SimilarityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_unit("similarity.negation_overlap", self.negation_overlap)?;
        if self.fuzzy_max_chars == 0 {
            return Err(ConfigError::BelowMinimum {
                name: "similarity.fuzzy_max_chars".to_string(),
                min: 1,
                value: 0,
            });
        }
        Ok(())
    }
}
