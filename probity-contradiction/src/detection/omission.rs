//! A material qualifier present in one account and dropped from another.

use probity_core::models::{Contradiction, ContradictionType, DetectionMethod, Severity};

use super::DetectionContext;

/// Words that change what the rest of a sentence means.
pub const QUALIFIERS: &[&str] = &[
    "because", "after", "unless", "except", "only", "however", "although", "but", "despite",
    "following",
];

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<Contradiction> {
    let cfg = ctx.config;
    let index = ctx.index;
    let mut found = Vec::new();

    for (i, j) in index.all_pairs() {
        if ctx.claim(i).document_id == ctx.claim(j).document_id {
            continue;
        }
        let (short, long) = if (index.content[i].len(), ctx.claim(i).text.len())
            <= (index.content[j].len(), ctx.claim(j).text.len())
        {
            (i, j)
        } else {
            (j, i)
        };
        let short_content = &index.content[short];
        if short_content.is_empty() {
            continue;
        }
        let contained = short_content.intersection(&index.content[long]).count();
        if (contained as f64 / short_content.len() as f64) < cfg.omission_containment {
            continue;
        }

        let dropped: Vec<&str> = QUALIFIERS
            .iter()
            .copied()
            .filter(|q| index.tokens[long].contains(*q) && !index.tokens[short].contains(*q))
            .collect();
        if dropped.is_empty() {
            continue;
        }

        let sim = ctx.similarity(i, j);
        if sim.score < cfg.omission_similarity {
            continue;
        }

        let method = DetectionMethod::new(ContradictionType::Omission, sim.strategy);
        if let Some(c) = ctx.finding((i, j), Severity::Low, sim, 0.6 * sim.score, method) {
            found.push(c.with_explanation(format!(
                "'{}' omits the qualifier '{}' present in '{}'",
                ctx.claim(short).text,
                dropped.join("', '"),
                ctx.claim(long).text
            )));
        }
    }
    found
}
