//! Explicit negation: the texts differ in negation parity but otherwise
//! say the same thing.

use std::collections::BTreeSet;

use crate::text;

const NEGATORS: &[&str] = &["not", "never", "no", "nor", "neither"];

/// Auxiliaries that only carry tense once the negator is gone
/// ("did not attend" / "attended").
const DO_SUPPORT: &[&str] = &["do", "does", "did"];

/// Split a token into its lexical remainder and whether it negates.
fn split_negation(token: &str) -> (Option<String>, bool) {
    if NEGATORS.contains(&token) {
        return (None, true);
    }
    match token {
        "cannot" => return (Some("can".to_string()), true),
        "won't" => return (Some("will".to_string()), true),
        "can't" => return (Some("can".to_string()), true),
        "shan't" => return (Some("shall".to_string()), true),
        _ => {}
    }
    if let Some(stem) = token.strip_suffix("n't") {
        return (Some(stem.to_string()), true);
    }
    (Some(token.to_string()), false)
}

/// Negator count and stemmed content of a text.
pub fn analyse(text_in: &str) -> (usize, BTreeSet<String>) {
    let mut negations = 0;
    let mut content = BTreeSet::new();
    for token in text::tokenize(text_in) {
        let (rest, negated) = split_negation(&token);
        if negated {
            negations += 1;
        }
        let Some(rest) = rest else { continue };
        if text::is_stopword(&rest) || DO_SUPPORT.contains(&rest.as_str()) {
            continue;
        }
        content.insert(text::stem(&rest));
    }
    (negations, content)
}

/// Number of negators in the text.
pub fn negation_count(text_in: &str) -> usize {
    analyse(text_in).0
}

/// True if exactly one side is negated (by parity) and the remaining
/// content overlaps by at least `min_overlap` (Jaccard).
pub fn is_negated_pair(a: &str, b: &str, min_overlap: f64) -> bool {
    let (neg_a, content_a) = analyse(a);
    let (neg_b, content_b) = analyse(b);
    if neg_a % 2 == neg_b % 2 {
        return false;
    }
    if content_a.is_empty() || content_b.is_empty() {
        return false;
    }
    text::jaccard(&content_a, &content_b) >= min_overlap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn did_not_attend_negates_attended() {
        assert!(is_negated_pair(
            "The mother attended the meeting",
            "The mother did not attend the meeting",
            0.75
        ));
    }

    #[test]
    fn contractions_count_as_negation() {
        assert!(is_negated_pair(
            "He was present at the hearing",
            "He wasn't present at the hearing",
            0.75
        ));
        assert_eq!(negation_count("She cannot recall and won't say"), 2);
    }

    #[test]
    fn double_negation_cancels() {
        assert!(!is_negated_pair(
            "The child was safe at home",
            "It is not true that the child was not safe at home",
            0.75
        ));
    }

    #[test]
    fn different_content_is_not_negation() {
        assert!(!is_negated_pair(
            "The father attended the meeting",
            "The social worker did not complete the assessment",
            0.75
        ));
    }

    #[test]
    fn same_parity_is_not_negation() {
        assert!(!is_negated_pair(
            "The mother attended the meeting",
            "The mother attended the meeting on time",
            0.5
        ));
    }
}
