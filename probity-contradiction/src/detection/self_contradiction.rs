//! Same author, similar statements, opposite polarity. Always critical.

use probity_core::models::{Contradiction, ContradictionType, DetectionMethod, Severity};

use super::DetectionContext;

/// Compare every pair of claims made by the same author. Topic blocking
/// does not apply: author groups are small and a missed self-contradiction
/// is the costliest miss.
pub fn detect(ctx: &DetectionContext<'_>) -> Vec<Contradiction> {
    let cfg = ctx.config;
    let mut found = Vec::new();

    for (author, group) in &ctx.index.by_author {
        if group.len() < 2 {
            continue;
        }
        for (n, &i) in group.iter().enumerate() {
            for &j in &group[n + 1..] {
                let sim = ctx.similarity(i, j);
                if sim.score < cfg.self_similarity {
                    continue;
                }
                let (a, b) = (ctx.claim(i), ctx.claim(j));
                let opposition = ctx.polarity.opposition(&a.text, &b.text);
                if !opposition.is_opposite || opposition.confidence < cfg.self_opposition {
                    continue;
                }

                let confidence = (sim.score + opposition.confidence) / 2.0;
                let method = DetectionMethod::new(ContradictionType::SelfContradiction, sim.strategy)
                    .with_opposition(opposition.path);
                if let Some(c) = ctx.finding((i, j), Severity::Critical, sim, confidence, method) {
                    let name = a.asserted_by.as_deref().unwrap_or(author).trim();
                    found.push(c.with_explanation(format!(
                        "{name} states '{}' and also '{}'",
                        a.text, b.text
                    )));
                }
            }
        }
    }
    found
}
