//! Opposite assertions about the same subject by different sources.

use probity_core::constants::STRUCTURED_OPPOSITION_CONFIDENCE;
use probity_core::models::{
    Claim, Contradiction, ContradictionType, DetectionMethod, Modality, Opposition,
    OppositionPath, Severity,
};

use super::DetectionContext;

/// Opposition recorded in claim metadata: affirm vs negate, or asserted
/// vs denied.
pub fn structured_opposition(a: &Claim, b: &Claim) -> Opposition {
    let polarity = a.polarity != b.polarity;
    let modality = matches!(
        (a.modality, b.modality),
        (Modality::Asserted, Modality::Denied) | (Modality::Denied, Modality::Asserted)
    );
    if polarity || modality {
        Opposition::found(STRUCTURED_OPPOSITION_CONFIDENCE, OppositionPath::Structured)
    } else {
        Opposition::none()
    }
}

fn opposition_label(path: Option<OppositionPath>) -> &'static str {
    match path {
        Some(OppositionPath::ExplicitNegation) => "explicit negation",
        Some(OppositionPath::Antonym) => "opposite phrasing",
        Some(OppositionPath::Structured) => "opposite polarity or modality",
        None => "opposed",
    }
}

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<Contradiction> {
    let cfg = ctx.config;
    let mut found = Vec::new();

    for (i, j) in ctx.index.all_pairs() {
        let (a, b) = (ctx.claim(i), ctx.claim(j));
        if matches!((a.author_key(), b.author_key()), (Some(x), Some(y)) if x == y) {
            continue;
        }
        let sim = ctx.similarity(i, j);
        if sim.score < cfg.direct_similarity {
            continue;
        }

        let textual = ctx.polarity.opposition(&a.text, &b.text);
        let textual = if textual.is_opposite && textual.confidence >= cfg.direct_opposition {
            textual
        } else {
            Opposition::none()
        };
        let opposition = textual.max(structured_opposition(a, b));
        if !opposition.is_opposite {
            continue;
        }

        let confidence = (sim.score + opposition.confidence) / 2.0;
        let method = DetectionMethod::new(ContradictionType::Direct, sim.strategy)
            .with_opposition(opposition.path);
        if let Some(c) = ctx.finding((i, j), Severity::High, sim, confidence, method) {
            found.push(c.with_explanation(format!(
                "'{}' vs '{}' ({})",
                a.text,
                b.text,
                opposition_label(opposition.path)
            )));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use probity_core::models::Polarity;

    #[test]
    fn polarity_mismatch_is_structured_opposition() {
        let a = Claim::new("a", "case", "d", "x");
        let b = Claim::new("b", "case", "d", "x").with_polarity(Polarity::Negate);
        let o = structured_opposition(&a, &b);
        assert!(o.is_opposite);
        assert_eq!(o.confidence, 0.8);
        assert_eq!(o.path, Some(OppositionPath::Structured));
    }

    #[test]
    fn asserted_vs_denied_is_structured_opposition() {
        let a = Claim::new("a", "case", "d", "x");
        let b = Claim::new("b", "case", "d", "x").with_modality(Modality::Denied);
        assert!(structured_opposition(&a, &b).is_opposite);
    }

    #[test]
    fn alleged_vs_asserted_is_not() {
        let a = Claim::new("a", "case", "d", "x");
        let b = Claim::new("b", "case", "d", "x").with_modality(Modality::Alleged);
        assert!(!structured_opposition(&a, &b).is_opposite);
    }
}
