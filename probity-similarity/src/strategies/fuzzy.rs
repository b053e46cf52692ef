//! Token-sort fuzzy string matching.

use probity_core::errors::{ProbityResult, SimilarityError};
use probity_core::models::SimilarityStrategyKind;
use probity_core::traits::ISimilarityStrategy;

use crate::text;

/// Sorts each text's tokens, then scores `1 - levenshtein / max_len`.
/// Word order differences cost nothing; spelling variants cost little.
pub struct FuzzyTokenStrategy {
    max_chars: usize,
}

impl FuzzyTokenStrategy {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl ISimilarityStrategy for FuzzyTokenStrategy {
    fn kind(&self) -> SimilarityStrategyKind {
        SimilarityStrategyKind::FuzzyToken
    }

    fn is_available(&self) -> bool {
        true
    }

    fn score(&self, a: &str, b: &str) -> ProbityResult<f64> {
        let sa = sorted_tokens(a);
        let sb = sorted_tokens(b);
        let (la, lb) = (sa.chars().count(), sb.chars().count());

        if la == 0 || lb == 0 {
            return Err(insufficient("text has no word tokens"));
        }
        if la > self.max_chars || lb > self.max_chars {
            return Err(insufficient("text exceeds fuzzy length limit"));
        }
        Ok(token_sort_ratio(&sa, &sb))
    }
}

fn insufficient(reason: &str) -> probity_core::ProbityError {
    SimilarityError::InsufficientInput {
        strategy: SimilarityStrategyKind::FuzzyToken.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens = text::tokenize(text);
    tokens.sort();
    tokens.join(" ")
}

/// `1 - distance / max_len` over two already-sorted token strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Levenshtein distance over chars, two-row.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
