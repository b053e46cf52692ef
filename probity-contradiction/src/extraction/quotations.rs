//! Quoted material inside claim text.

use std::sync::LazyLock;

use regex::Regex;

/// Straight double quotes, curly double quotes, and curly single quotes.
/// Straight single quotes are skipped: they collide with apostrophes.
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]{2,})"|\x{201C}([^\x{201D}]{2,})\x{201D}|\x{2018}([^\x{2019}]{2,})\x{2019}"#)
        .unwrap()
});

/// Quoted passages, trimmed, in order of appearance.
pub fn extract(text: &str) -> Vec<String> {
    QUOTE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().trim().to_string())
        })
        .filter(|q| !q.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_and_curly_quotes() {
        let q = extract("He said \"I will hurt you\" and later \u{201C}I never meant it\u{201D}.");
        assert_eq!(q, vec!["I will hurt you", "I never meant it"]);
    }

    #[test]
    fn apostrophes_are_not_quotes() {
        assert!(extract("The mother's account wasn't consistent").is_empty());
    }
}
