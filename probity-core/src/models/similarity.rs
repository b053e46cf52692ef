use serde::{Deserialize, Serialize};
use std::fmt;

/// Which similarity strategy produced a score. Declaration order is the
/// fallback priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityStrategyKind {
    /// Cosine similarity of dense embeddings.
    Embedding,
    /// Token-sort Levenshtein ratio.
    FuzzyToken,
    /// Jaccard overlap of token sets.
    LexicalJaccard,
}

impl SimilarityStrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SimilarityStrategyKind::Embedding => "embedding",
            SimilarityStrategyKind::FuzzyToken => "fuzzy_token",
            SimilarityStrategyKind::LexicalJaccard => "lexical_jaccard",
        }
    }
}

impl fmt::Display for SimilarityStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A similarity score in [0, 1] plus the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScore {
    pub score: f64,
    pub strategy: SimilarityStrategyKind,
}

impl SimilarityScore {
    pub fn new(score: f64, strategy: SimilarityStrategyKind) -> Self {
        let score = if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { score, strategy }
    }
}

/// How an opposition was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OppositionPath {
    /// "X" vs "did not X".
    ExplicitNegation,
    /// Curated opposite phrases ("cooperated" vs "refused to cooperate").
    Antonym,
    /// Claim metadata: opposite polarity or asserted vs denied.
    Structured,
}

impl OppositionPath {
    pub fn as_str(self) -> &'static str {
        match self {
            OppositionPath::ExplicitNegation => "explicit_negation",
            OppositionPath::Antonym => "antonym",
            OppositionPath::Structured => "structured",
        }
    }
}

/// Result of polarity opposition detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opposition {
    pub is_opposite: bool,
    pub confidence: f64,
    pub path: Option<OppositionPath>,
}

impl Opposition {
    pub fn none() -> Self {
        Self {
            is_opposite: false,
            confidence: 0.0,
            path: None,
        }
    }

    pub fn found(confidence: f64, path: OppositionPath) -> Self {
        Self {
            is_opposite: true,
            confidence: confidence.clamp(0.0, 1.0),
            path: Some(path),
        }
    }

    /// Keep whichever of the two has the higher confidence.
    pub fn max(self, other: Opposition) -> Opposition {
        if other.confidence > self.confidence {
            other
        } else {
            self
        }
    }
}

impl Default for Opposition {
    fn default() -> Self {
        Self::none()
    }
}
