//! Normalization, tokenization and light stemming.

use std::collections::BTreeSet;

/// Function words ignored when comparing claim content.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "being", "but", "by", "for", "from", "had",
    "has", "have", "he", "her", "hers", "him", "his", "i", "in", "into", "is", "it", "its", "me",
    "my", "of", "on", "or", "our", "she", "so", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "to", "was", "we", "were", "which", "who", "whom",
    "with", "you", "your",
];

/// Lowercase word tokens. Apostrophes inside words are kept so that
/// contractions ("didn't") survive as single tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(['\u{2019}', '\u{2018}'], "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical form used for equality checks and cache keys.
pub fn normalize(text: &str) -> String {
    tokenize(text).join(" ")
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Stemmed tokens minus stopwords.
pub fn content_tokens(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .map(|t| stem(&t))
        .collect()
}

/// Crude suffix stripper: enough to match "attended" with "attend" and
/// "cooperated" with "cooperate".
pub fn stem(word: &str) -> String {
    let word = word.strip_suffix("'s").unwrap_or(word);
    let len = word.chars().count();

    let stripped: String = if len > 5 && word.ends_with("ing") {
        word[..word.len() - 3].to_string()
    } else if len > 4 && word.ends_with("ied") {
        format!("{}y", &word[..word.len() - 3])
    } else if len > 4 && (word.ends_with("ed") || word.ends_with("es")) {
        word[..word.len() - 2].to_string()
    } else if len > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    };

    if stripped.chars().count() > 4 && stripped.ends_with('e') {
        stripped[..stripped.len() - 1].to_string()
    } else {
        stripped
    }
}

/// Jaccard overlap of two sets. Two empty sets score 0.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
