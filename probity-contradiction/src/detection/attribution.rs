//! The same statement put in different mouths.

use std::collections::BTreeSet;

use probity_core::models::{Contradiction, ContradictionType, DetectionMethod, Severity};

use super::DetectionContext;

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<Contradiction> {
    let reported = &ctx.index.speakers;
    let mut found = Vec::new();

    for (n, (i, speakers_i)) in reported.iter().enumerate() {
        for (j, speakers_j) in &reported[n + 1..] {
            let (i, j) = (*i, *j);
            if !ctx.index.is_candidate(i, j) || !speakers_i.is_disjoint(speakers_j) {
                continue;
            }
            let sim = ctx.similarity(i, j);
            if sim.score <= ctx.config.attribution_similarity {
                continue;
            }

            let method = DetectionMethod::new(ContradictionType::Attribution, sim.strategy);
            if let Some(c) = ctx.finding((i, j), Severity::Medium, sim, 0.8 * sim.score, method) {
                let who = |s: &BTreeSet<String>| {
                    s.iter().cloned().collect::<Vec<_>>().join(", ")
                };
                found.push(c.with_explanation(format!(
                    "same account attributed to {} and to {}",
                    who(speakers_i),
                    who(speakers_j)
                )));
            }
        }
    }
    found
}
