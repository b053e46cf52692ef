use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Thresholds for the eight contradiction detectors.
///
/// Similarity thresholds are inclusive (`>=`) except
/// `attribution_similarity`, which must be strictly exceeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContradictionConfig {
    pub self_similarity: f64,
    pub self_opposition: f64,
    pub modality_shift_similarity: f64,
    pub temporal_similarity: f64,
    pub value_similarity: f64,
    /// Relative difference (of the larger value) above which two
    /// same-unit quantities conflict.
    pub value_relative_difference: f64,
    pub attribution_similarity: f64,
    pub direct_similarity: f64,
    pub direct_opposition: f64,
    pub quotation_similarity: f64,
    /// Quote pairs at or above this similarity are the same quotation.
    pub quotation_match: f64,
    /// Quote pairs at or above this similarity are faithful.
    pub quotation_fidelity: f64,
    pub omission_similarity: f64,
    /// Share of the shorter claim's content tokens found in the longer one.
    pub omission_containment: f64,
    /// Restrict cross-author detectors to claims sharing a content token.
    /// Ignored while the scorer works from embeddings, where paraphrases
    /// share no tokens.
    pub topic_blocking: bool,
    /// Run detectors on the rayon pool.
    pub parallel: bool,
}

impl Default for ContradictionConfig {
    fn default() -> Self {
        Self {
            self_similarity: defaults::DEFAULT_SELF_SIMILARITY,
            self_opposition: defaults::DEFAULT_SELF_OPPOSITION,
            modality_shift_similarity: defaults::DEFAULT_MODALITY_SHIFT_SIMILARITY,
            temporal_similarity: defaults::DEFAULT_TEMPORAL_SIMILARITY,
            value_similarity: defaults::DEFAULT_VALUE_SIMILARITY,
            value_relative_difference: defaults::DEFAULT_VALUE_RELATIVE_DIFFERENCE,
            attribution_similarity: defaults::DEFAULT_ATTRIBUTION_SIMILARITY,
            direct_similarity: defaults::DEFAULT_DIRECT_SIMILARITY,
            direct_opposition: defaults::DEFAULT_DIRECT_OPPOSITION,
            quotation_similarity: defaults::DEFAULT_QUOTATION_SIMILARITY,
            quotation_match: defaults::DEFAULT_QUOTATION_MATCH,
            quotation_fidelity: defaults::DEFAULT_QUOTATION_FIDELITY,
            omission_similarity: defaults::DEFAULT_OMISSION_SIMILARITY,
            omission_containment: defaults::DEFAULT_OMISSION_CONTAINMENT,
            topic_blocking: defaults::DEFAULT_TOPIC_BLOCKING,
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}

impl ContradictionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("contradiction.self_similarity", self.self_similarity),
            ("contradiction.self_opposition", self.self_opposition),
            (
                "contradiction.modality_shift_similarity",
                self.modality_shift_similarity,
            ),
            ("contradiction.temporal_similarity", self.temporal_similarity),
            ("contradiction.value_similarity", self.value_similarity),
            (
                "contradiction.value_relative_difference",
                self.value_relative_difference,
            ),
            (
                "contradiction.attribution_similarity",
                self.attribution_similarity,
            ),
            ("contradiction.direct_similarity", self.direct_similarity),
            ("contradiction.direct_opposition", self.direct_opposition),
            ("contradiction.quotation_similarity", self.quotation_similarity),
            ("contradiction.quotation_match", self.quotation_match),
            ("contradiction.quotation_fidelity", self.quotation_fidelity),
            ("contradiction.omission_similarity", self.omission_similarity),
            ("contradiction.omission_containment", self.omission_containment),
        ];
        for (name, value) in thresholds {
            ConfigError::check_unit(name, value)?;
        }
        Ok(())
    }
}
