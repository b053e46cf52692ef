//! Curated opposite phrases.

use super::negation;
use crate::text;

/// Pairs of phrases that assert opposite facts about the same subject.
/// Matched on normalized, space-padded text.
pub const OPPOSITES: &[(&str, &str)] = &[
    ("cooperated", "refused to cooperate"),
    ("cooperative", "uncooperative"),
    ("complied", "failed to comply"),
    ("compliant", "non compliant"),
    ("attended", "missed"),
    ("attended", "failed to attend"),
    ("present", "absent"),
    ("accepted", "rejected"),
    ("agreed", "disagreed"),
    ("agreed", "refused"),
    ("admitted", "denied"),
    ("confirmed", "denied"),
    ("true", "false"),
    ("safe", "unsafe"),
    ("appropriate", "inappropriate"),
    ("adequate", "inadequate"),
    ("consistent", "inconsistent"),
    ("engaged", "disengaged"),
    ("willing", "unwilling"),
    ("able", "unable"),
    ("reliable", "unreliable"),
    ("credible", "not credible"),
    ("sober", "intoxicated"),
    ("guilty", "innocent"),
    ("increased", "decreased"),
    ("improved", "deteriorated"),
    ("lawful", "unlawful"),
    ("voluntary", "involuntary"),
    ("supported", "opposed"),
    ("calm", "aggressive"),
];

fn pad(normalized: &str) -> String {
    format!(" {normalized} ")
}

/// Whether `padded` contains `phrase` as a whole-word sequence once any
/// occurrence of `excluding` (which may embed `phrase`) is removed.
fn carries(padded: &str, phrase: &str, excluding: &str) -> bool {
    let without = padded.replace(&pad(excluding), " ");
    without.contains(&pad(phrase))
}

/// Returns the first curated pair carried by exactly one side each.
/// Texts must share negation parity, otherwise negation already speaks.
pub fn find_opposite_phrase(a: &str, b: &str) -> Option<(&'static str, &'static str)> {
    if negation::negation_count(a) % 2 != negation::negation_count(b) % 2 {
        return None;
    }
    let pa = pad(&text::normalize(a));
    let pb = pad(&text::normalize(b));

    OPPOSITES.iter().copied().find(|(x, y)| {
        let a_x = carries(&pa, x, y);
        let a_y = carries(&pa, y, x);
        let b_x = carries(&pb, x, y);
        let b_y = carries(&pb, y, x);
        (a_x && !a_y && b_y && !b_x) || (a_y && !a_x && b_x && !b_y)
    })
}
