use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contradiction::{Contradiction, ContradictionType};
use super::severity::Severity;

/// How many documents `most_implicated_documents` keeps.
const MOST_IMPLICATED_LIMIT: usize = 10;

/// A document and the number of contradictions touching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCount {
    pub document_id: String,
    pub count: usize,
}

/// Summary statistics over a contradiction list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContradictionSummary {
    pub total: usize,
    pub by_type: BTreeMap<ContradictionType, usize>,
    pub by_severity: BTreeMap<Severity, usize>,
    pub authors_with_self_contradictions: Vec<String>,
    /// Contradictions per author. A contradiction counts once per
    /// distinct author involved.
    pub per_author: BTreeMap<String, usize>,
    /// Contradictions per source document. A contradiction counts once
    /// per distinct document involved.
    pub per_document: BTreeMap<String, usize>,
    pub most_implicated_documents: Vec<DocumentCount>,
}

impl ContradictionSummary {
    /// Tally a contradiction list. Reports only ever build their summary
    /// through here.
    pub fn tally(contradictions: &[Contradiction]) -> Self {
        let mut summary = Self {
            total: contradictions.len(),
            ..Self::default()
        };
        let mut self_authors: BTreeSet<String> = BTreeSet::new();

        for c in contradictions {
            *summary.by_type.entry(c.contradiction_type).or_default() += 1;
            *summary.by_severity.entry(c.severity).or_default() += 1;

            for author in &c.authors {
                *summary.per_author.entry(author.clone()).or_default() += 1;
            }
            if c.contradiction_type == ContradictionType::SelfContradiction {
                self_authors.extend(c.authors.iter().cloned());
            }

            *summary
                .per_document
                .entry(c.claim_a_document_id.clone())
                .or_default() += 1;
            if c.claim_b_document_id != c.claim_a_document_id {
                *summary
                    .per_document
                    .entry(c.claim_b_document_id.clone())
                    .or_default() += 1;
            }
        }

        summary.authors_with_self_contradictions = self_authors.into_iter().collect();

        let mut documents: Vec<DocumentCount> = summary
            .per_document
            .iter()
            .map(|(document_id, count)| DocumentCount {
                document_id: document_id.clone(),
                count: *count,
            })
            .collect();
        documents.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.document_id.cmp(&b.document_id))
        });
        documents.truncate(MOST_IMPLICATED_LIMIT);
        summary.most_implicated_documents = documents;

        summary
    }

    pub fn count_of_type(&self, contradiction_type: ContradictionType) -> usize {
        self.by_type.get(&contradiction_type).copied().unwrap_or(0)
    }

    pub fn count_of_severity(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }
}

/// Case-scoped result of one detection run. Recomputed per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContradictionReport {
    pub case_id: String,
    pub generated_at: DateTime<Utc>,
    pub claims_analysed: usize,
    /// Sorted by severity desc, confidence desc, then pair.
    pub contradictions: Vec<Contradiction>,
    pub summary: ContradictionSummary,
}

impl ContradictionReport {
    pub fn new(
        case_id: impl Into<String>,
        claims_analysed: usize,
        contradictions: Vec<Contradiction>,
    ) -> Self {
        let summary = ContradictionSummary::tally(&contradictions);
        Self {
            case_id: case_id.into(),
            generated_at: Utc::now(),
            claims_analysed,
            contradictions,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contradictions.is_empty()
    }

    pub fn by_type(
        &self,
        contradiction_type: ContradictionType,
    ) -> impl Iterator<Item = &Contradiction> + '_ {
        self.contradictions
            .iter()
            .filter(move |c| c.contradiction_type == contradiction_type)
    }

    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Contradiction> + '_ {
        self.contradictions
            .iter()
            .filter(move |c| c.severity == severity)
    }

    pub fn self_contradictions(&self) -> Vec<&Contradiction> {
        self.by_type(ContradictionType::SelfContradiction).collect()
    }

    pub fn critical_findings(&self) -> Vec<&Contradiction> {
        self.by_severity(Severity::Critical).collect()
    }

    pub fn grouped_by_type(&self) -> BTreeMap<ContradictionType, Vec<&Contradiction>> {
        let mut groups: BTreeMap<ContradictionType, Vec<&Contradiction>> = BTreeMap::new();
        for c in &self.contradictions {
            groups.entry(c.contradiction_type).or_default().push(c);
        }
        groups
    }

    pub fn grouped_by_severity(&self) -> BTreeMap<Severity, Vec<&Contradiction>> {
        let mut groups: BTreeMap<Severity, Vec<&Contradiction>> = BTreeMap::new();
        for c in &self.contradictions {
            groups.entry(c.severity).or_default().push(c);
        }
        groups
    }

    pub fn get(&self, contradiction_id: &str) -> Option<&Contradiction> {
        self.contradictions.iter().find(|c| c.id == contradiction_id)
    }

    /// Mark a contradiction resolved. Returns `false` when no
    /// contradiction has the given id.
    pub fn resolve(&mut self, contradiction_id: &str, note: impl Into<String>) -> bool {
        match self
            .contradictions
            .iter_mut()
            .find(|c| c.id == contradiction_id)
        {
            Some(c) => {
                c.resolve(note);
                true
            }
            None => false,
        }
    }
}
