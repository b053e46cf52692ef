use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::claim::Claim;
use super::severity::Severity;
use super::similarity::{OppositionPath, SimilarityStrategyKind};
use crate::errors::{ProbityError, ProbityResult};

/// The eight contradiction classifications. Declaration order is the
/// detector run order, which decides deduplication ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionType {
    /// Same author, similar statements, opposite polarity.
    SelfContradiction,
    /// An allegation restated as established fact.
    ModalityShift,
    /// Same event, different dates.
    Temporal,
    /// Same topic, materially different quantities.
    Value,
    /// Same statement attributed to different speakers.
    Attribution,
    /// Opposite assertions about the same subject.
    Direct,
    /// Quoted material that does not match between claims.
    Quotation,
    /// Material qualifier present in one account, absent in another.
    Omission,
}

impl ContradictionType {
    pub const ALL: [ContradictionType; 8] = [
        ContradictionType::SelfContradiction,
        ContradictionType::ModalityShift,
        ContradictionType::Temporal,
        ContradictionType::Value,
        ContradictionType::Attribution,
        ContradictionType::Direct,
        ContradictionType::Quotation,
        ContradictionType::Omission,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContradictionType::SelfContradiction => "self_contradiction",
            ContradictionType::ModalityShift => "modality_shift",
            ContradictionType::Temporal => "temporal",
            ContradictionType::Value => "value",
            ContradictionType::Attribution => "attribution",
            ContradictionType::Direct => "direct",
            ContradictionType::Quotation => "quotation",
            ContradictionType::Omission => "omission",
        }
    }

    pub fn legal_significance(self) -> &'static str {
        match self {
            ContradictionType::SelfContradiction => {
                "An internally inconsistent source undermines its own credibility"
            }
            ContradictionType::ModalityShift => {
                "An unproven allegation is being relied on as established fact"
            }
            ContradictionType::Temporal => {
                "Conflicting dates for one event affect chronology and reliability"
            }
            ContradictionType::Value => {
                "Conflicting quantities affect the weight of the evidence"
            }
            ContradictionType::Attribution => {
                "Statements may be misattributed between participants"
            }
            ContradictionType::Direct => "Sources give irreconcilable accounts of the same matter",
            ContradictionType::Quotation => "Quoted material may have been misrepresented",
            ContradictionType::Omission => {
                "A later account omits context that changes the meaning of the earlier one"
            }
        }
    }

    pub fn recommended_action(self) -> &'static str {
        match self {
            ContradictionType::SelfContradiction => {
                "Put both statements to the author and seek an explanation"
            }
            ContradictionType::ModalityShift => {
                "Identify the evidence relied on for the finding or restore the allegation wording"
            }
            ContradictionType::Temporal => "Check both dates against contemporaneous records",
            ContradictionType::Value => "Verify the figure against the primary source",
            ContradictionType::Attribution => "Confirm who made the statement from the source record",
            ContradictionType::Direct => "Test both accounts against independent evidence",
            ContradictionType::Quotation => "Compare the quotation against the original document",
            ContradictionType::Omission => "Restore the omitted context or explain its exclusion",
        }
    }
}

impl fmt::Display for ContradictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which classifier and similarity strategy produced a contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionMethod {
    pub classifier: ContradictionType,
    pub similarity_strategy: SimilarityStrategyKind,
    pub opposition_path: Option<OppositionPath>,
}

impl DetectionMethod {
    pub fn new(classifier: ContradictionType, similarity_strategy: SimilarityStrategyKind) -> Self {
        Self {
            classifier,
            similarity_strategy,
            opposition_path: None,
        }
    }

    pub fn with_opposition(mut self, path: Option<OppositionPath>) -> Self {
        self.opposition_path = path;
        self
    }

    /// Compact audit tag, e.g. `self_contradiction/fuzzy_token/explicit_negation`.
    pub fn tag(&self) -> String {
        match self.opposition_path {
            Some(path) => format!(
                "{}/{}/{}",
                self.classifier,
                self.similarity_strategy,
                path.as_str()
            ),
            None => format!("{}/{}", self.classifier, self.similarity_strategy),
        }
    }
}

/// A detected inconsistency between two distinct claims.
///
/// The pair is stored in canonical order (`claim_a_id < claim_b_id`), so
/// the same two claims always produce the same record and id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contradiction {
    pub id: String,
    pub case_id: String,
    pub claim_a_id: String,
    pub claim_b_id: String,
    pub claim_a_document_id: String,
    pub claim_b_document_id: String,
    /// Distinct authors of the two claims, in claim order.
    pub authors: Vec<String>,
    pub contradiction_type: ContradictionType,
    pub severity: Severity,
    pub semantic_similarity: f64,
    pub confidence: f64,
    pub temporal_gap_days: Option<i64>,
    pub same_author: bool,
    pub explanation: String,
    pub legal_significance: String,
    pub recommended_action: String,
    pub detection_method: DetectionMethod,
    pub detected_at: DateTime<Utc>,
    pub resolved: bool,
    pub resolution_note: Option<String>,
}

impl Contradiction {
    /// Build a contradiction between two claims.
    ///
    /// Fails with [`ProbityError::IdenticalClaimPair`] when both claims
    /// carry the same identifier.
    pub fn new(
        case_id: &str,
        a: &Claim,
        b: &Claim,
        severity: Severity,
        semantic_similarity: f64,
        confidence: f64,
        detection_method: DetectionMethod,
    ) -> ProbityResult<Self> {
        if a.id == b.id {
            return Err(ProbityError::IdenticalClaimPair {
                claim_id: a.id.clone(),
            });
        }
        let (first, second) = if a.id < b.id { (a, b) } else { (b, a) };
        let contradiction_type = detection_method.classifier;

        let mut authors: Vec<String> = Vec::with_capacity(2);
        for author in [&first.asserted_by, &second.asserted_by]
            .into_iter()
            .flatten()
        {
            let author = author.trim();
            if !author.is_empty() && !authors.iter().any(|a| a.eq_ignore_ascii_case(author)) {
                authors.push(author.to_string());
            }
        }
        let same_author = matches!(
            (first.author_key(), second.author_key()),
            (Some(x), Some(y)) if x == y
        );

        Ok(Self {
            id: Self::compute_id(case_id, contradiction_type, &first.id, &second.id),
            case_id: case_id.to_string(),
            claim_a_id: first.id.clone(),
            claim_b_id: second.id.clone(),
            claim_a_document_id: first.document_id.clone(),
            claim_b_document_id: second.document_id.clone(),
            authors,
            contradiction_type,
            severity,
            semantic_similarity: semantic_similarity.clamp(0.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
            temporal_gap_days: None,
            same_author,
            explanation: format!(
                "{}: '{}' vs '{}'",
                contradiction_type, first.text, second.text
            ),
            legal_significance: contradiction_type.legal_significance().to_string(),
            recommended_action: contradiction_type.recommended_action().to_string(),
            detection_method,
            detected_at: Utc::now(),
            resolved: false,
            resolution_note: None,
        })
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_temporal_gap(mut self, days: i64) -> Self {
        self.temporal_gap_days = Some(days);
        self
    }

    /// Deterministic id: blake3 of case, type, and canonical pair.
    pub fn compute_id(
        case_id: &str,
        contradiction_type: ContradictionType,
        claim_a_id: &str,
        claim_b_id: &str,
    ) -> String {
        let (lo, hi) = if claim_a_id <= claim_b_id {
            (claim_a_id, claim_b_id)
        } else {
            (claim_b_id, claim_a_id)
        };
        let mut hasher = blake3::Hasher::new();
        for part in [case_id, contradiction_type.as_str(), lo, hi] {
            hasher.update(part.as_bytes());
            hasher.update(&[0x1f]);
        }
        let hex = hasher.finalize().to_hex();
        hex.as_str()[..32].to_string()
    }

    /// Canonical unordered pair key.
    pub fn pair_key(&self) -> (&str, &str) {
        (&self.claim_a_id, &self.claim_b_id)
    }

    pub fn involves(&self, claim_id: &str) -> bool {
        self.claim_a_id == claim_id || self.claim_b_id == claim_id
    }

    /// Record an analyst's resolution. The only mutation a detected
    /// contradiction accepts.
    pub fn resolve(&mut self, note: impl Into<String>) {
        self.resolved = true;
        self.resolution_note = Some(note.into());
    }
}
