//! An allegation restated elsewhere as established fact.

use std::sync::LazyLock;

use probity_core::models::{Contradiction, ContradictionType, DetectionMethod, Severity};
use regex::Regex;

use super::DetectionContext;

static FACT_INDICATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(established|confirmed|the fact that|clear that|proven|demonstrated)\b")
        .unwrap()
});

/// Words scanned before an indicator for a negator ("not been established").
const NEGATION_WINDOW: usize = 2;

fn is_negator(word: &str) -> bool {
    matches!(word, "not" | "never" | "no" | "cannot" | "nor") || word.ends_with("n't")
}

fn negated(preceding: &str) -> bool {
    preceding
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .rev()
        .take(NEGATION_WINDOW)
        .any(|w| is_negator(&w.to_lowercase()))
}

/// The first fact indicator in `text` that is not negated, if any.
pub fn fact_indicator(text: &str) -> Option<&str> {
    FACT_INDICATOR_RE
        .find_iter(text)
        .find(|m| !negated(&text[..m.start()]))
        .map(|m| m.as_str())
}

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<Contradiction> {
    let mut found = Vec::new();

    for (alleged, asserted) in ctx.index.pairs_across(&ctx.index.alleged, &ctx.index.asserted) {
        let Some(indicator) = fact_indicator(&ctx.claim(asserted).text) else {
            continue;
        };
        let sim = ctx.similarity(alleged, asserted);
        if sim.score < ctx.config.modality_shift_similarity {
            continue;
        }

        let method = DetectionMethod::new(ContradictionType::ModalityShift, sim.strategy);
        if let Some(c) = ctx.finding((alleged, asserted), Severity::High, sim, sim.score, method) {
            found.push(c.with_explanation(format!(
                "alleged '{}' is later treated as {indicator}: '{}'",
                ctx.claim(alleged).text,
                ctx.claim(asserted).text
            )));
        }
    }
    found
}
