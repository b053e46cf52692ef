//! One-pass claim index built before any pairwise comparison.
//!
//! Every per-claim extraction (dates, quantities, speakers, quotes,
//! content tokens) happens here exactly once, so detectors only read.

use std::collections::{BTreeMap, BTreeSet};

use probity_core::models::{Claim, Modality};
use probity_similarity::text;

use crate::extraction::dates::{self, DateRange};
use crate::extraction::quantities::{self, Quantity};
use crate::extraction::{quotations, reported_speech};

/// Positions into the claim slice the index was built from.
pub type ClaimIdx = usize;

#[derive(Debug, Default)]
pub struct ClaimIndex {
    /// Normalized author -> claims, for authors with at least one claim.
    pub by_author: BTreeMap<String, Vec<ClaimIdx>>,
    pub alleged: Vec<ClaimIdx>,
    pub asserted: Vec<ClaimIdx>,
    /// Claims with a resolvable date.
    pub temporal: Vec<(ClaimIdx, DateRange)>,
    /// Claims with at least one counted quantity.
    pub quantities: Vec<(ClaimIdx, Vec<Quantity>)>,
    /// Claims with at least one reported speaker.
    pub speakers: Vec<(ClaimIdx, BTreeSet<String>)>,
    /// Claims with at least one quotation.
    pub quotes: Vec<(ClaimIdx, Vec<String>)>,
    /// Stemmed content tokens per claim, parallel to the claim slice.
    pub content: Vec<BTreeSet<String>>,
    /// Raw token sets per claim, parallel to the claim slice.
    pub tokens: Vec<BTreeSet<String>>,
    /// Content token -> claims containing it.
    pub by_token: BTreeMap<String, Vec<ClaimIdx>>,
    topic_blocking: bool,
}

impl ClaimIndex {
    pub fn build(claims: &[Claim], topic_blocking: bool) -> Self {
        let mut index = ClaimIndex {
            topic_blocking,
            ..ClaimIndex::default()
        };

        for (i, claim) in claims.iter().enumerate() {
            if let Some(author) = claim.author_key() {
                index.by_author.entry(author).or_default().push(i);
            }
            match claim.modality {
                Modality::Alleged => index.alleged.push(i),
                Modality::Asserted => index.asserted.push(i),
                _ => {}
            }
            if let Some(range) = dates::resolve_range(claim) {
                index.temporal.push((i, range));
            }
            let qs = quantities::extract(&claim.text);
            if !qs.is_empty() {
                index.quantities.push((i, qs));
            }
            let speakers = reported_speech::speakers(&claim.text);
            if !speakers.is_empty() {
                index.speakers.push((i, speakers));
            }
            let quotes = quotations::extract(&claim.text);
            if !quotes.is_empty() {
                index.quotes.push((i, quotes));
            }

            let content = text::content_tokens(&claim.text);
            for token in &content {
                index.by_token.entry(token.clone()).or_default().push(i);
            }
            index.content.push(content);
            index
                .tokens
                .push(text::tokenize(&claim.text).into_iter().collect());
        }
        index
    }

    /// Whether a pair is worth scoring. With topic blocking on, the claims
    /// must share at least one content token.
    pub fn is_candidate(&self, i: ClaimIdx, j: ClaimIdx) -> bool {
        if i == j {
            return false;
        }
        if !self.topic_blocking {
            return true;
        }
        match (self.content.get(i), self.content.get(j)) {
            (Some(a), Some(b)) => !a.is_disjoint(b),
            _ => false,
        }
    }

    /// Candidate unordered pairs over the whole claim set, `i < j`.
    pub fn all_pairs(&self) -> Vec<(ClaimIdx, ClaimIdx)> {
        if self.topic_blocking {
            let mut pairs = BTreeSet::new();
            for members in self.by_token.values() {
                for (n, &i) in members.iter().enumerate() {
                    for &j in &members[n + 1..] {
                        pairs.insert((i.min(j), i.max(j)));
                    }
                }
            }
            pairs.into_iter().collect()
        } else {
            let n = self.content.len();
            (0..n)
                .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
                .collect()
        }
    }

    /// Candidate unordered pairs within one group.
    pub fn pairs_within(&self, group: &[ClaimIdx]) -> Vec<(ClaimIdx, ClaimIdx)> {
        let mut pairs = Vec::new();
        for (n, &i) in group.iter().enumerate() {
            for &j in &group[n + 1..] {
                if self.is_candidate(i, j) {
                    pairs.push((i.min(j), i.max(j)));
                }
            }
        }
        pairs
    }

    /// Candidate pairs across two groups. Pairs of a claim with itself are
    /// dropped.
    pub fn pairs_across(&self, left: &[ClaimIdx], right: &[ClaimIdx]) -> Vec<(ClaimIdx, ClaimIdx)> {
        let mut pairs = Vec::new();
        for &i in left {
            for &j in right {
                if self.is_candidate(i, j) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn claims() -> Vec<Claim> {
        vec![
            Claim::new("c1", "case", "d1", "The mother visited on 6 occasions").with_author("Dr Ahmed"),
            Claim::new("c2", "case", "d1", "The mother visited on 10 occasions")
                .with_author("dr ahmed ")
                .with_modality(Modality::Alleged),
            Claim::new("c3", "case", "d2", "Weather was fine")
                .with_start_date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
        ]
    }

    #[test]
    fn groups_by_normalized_author() {
        let index = ClaimIndex::build(&claims(), true);
        assert_eq!(index.by_author.get("dr ahmed"), Some(&vec![0, 1]));
        assert_eq!(index.alleged, vec![1]);
        assert_eq!(index.asserted, vec![0, 2]);
        assert_eq!(index.temporal.len(), 1);
        assert_eq!(index.quantities.len(), 2);
    }

    #[test]
    fn topic_blocking_drops_disjoint_pairs() {
        let index = ClaimIndex::build(&claims(), true);
        assert_eq!(index.all_pairs(), vec![(0, 1)]);
        assert!(!index.is_candidate(0, 2));

        let open = ClaimIndex::build(&claims(), false);
        assert_eq!(open.all_pairs(), vec![(0, 1), (0, 2), (1, 2)]);
        assert!(open.is_candidate(0, 2));
    }
}
