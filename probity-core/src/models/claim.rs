use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ProbityError, ProbityResult};

/// Kind of statement a claim records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Assertion,
    Allegation,
    Finding,
    Opinion,
    Observation,
    Admission,
    Recommendation,
    Other,
}

/// Epistemic status of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Asserted,
    Reported,
    Alleged,
    Denied,
    Hypothetical,
}

/// Whether the claim affirms or negates its predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Affirm,
    Negate,
}

/// An extracted factual statement. Owned by the host's claim store and
/// read-only to the engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub case_id: String,
    pub document_id: String,
    pub text: String,
    pub claim_type: ClaimType,
    pub modality: Modality,
    pub polarity: Polarity,
    /// In [0, 1] when present.
    #[serde(default)]
    pub certainty: Option<f64>,
    #[serde(default)]
    pub asserted_by: Option<String>,
    #[serde(default)]
    pub time_expression: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub paragraph: Option<u32>,
    /// Entities the claim is about.
    #[serde(default)]
    pub about_entities: Vec<String>,
}

impl Claim {
    /// Minimal asserted, affirmative claim. Remaining fields default to
    /// empty and can be set directly.
    pub fn new(
        id: impl Into<String>,
        case_id: impl Into<String>,
        document_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            case_id: case_id.into(),
            document_id: document_id.into(),
            text: text.into(),
            claim_type: ClaimType::Assertion,
            modality: Modality::Asserted,
            polarity: Polarity::Affirm,
            certainty: None,
            asserted_by: None,
            time_expression: None,
            start_date: None,
            end_date: None,
            page: None,
            paragraph: None,
            about_entities: Vec::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.asserted_by = Some(author.into());
        self
    }

    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_time_expression(mut self, expression: impl Into<String>) -> Self {
        self.time_expression = Some(expression.into());
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn about(mut self, entity_id: impl Into<String>) -> Self {
        self.about_entities.push(entity_id.into());
        self
    }

    /// Author identity used for grouping: trimmed and lowercased.
    /// `None` when the author is absent or blank.
    pub fn author_key(&self) -> Option<String> {
        self.asserted_by
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether the claim has any temporal anchor.
    pub fn has_time(&self) -> bool {
        self.start_date.is_some()
            || self
                .time_expression
                .as_deref()
                .is_some_and(|t| !t.trim().is_empty())
    }

    pub fn is_about(&self, entity_id: &str) -> bool {
        self.about_entities.iter().any(|e| e == entity_id)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> ProbityResult<()> {
        if self.id.trim().is_empty() {
            return Err(ProbityError::InvalidClaim {
                claim_id: self.id.clone(),
                reason: "identifier is empty".to_string(),
            });
        }
        if let Some(c) = self.certainty {
            if !(0.0..=1.0).contains(&c) {
                return Err(ProbityError::InvalidClaim {
                    claim_id: self.id.clone(),
                    reason: format!("certainty {c} outside [0, 1]"),
                });
            }
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ProbityError::InvalidClaim {
                    claim_id: self.id.clone(),
                    reason: format!("end date {end} precedes start date {start}"),
                });
            }
        }
        Ok(())
    }
}
