//! The same quotation reproduced differently.

use probity_core::models::{Contradiction, ContradictionType, DetectionMethod, Severity};
use probity_similarity::text;

use super::DetectionContext;

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<Contradiction> {
    let cfg = ctx.config;
    let quoted = &ctx.index.quotes;
    let mut found = Vec::new();

    for (n, (i, quotes_i)) in quoted.iter().enumerate() {
        for (j, quotes_j) in &quoted[n + 1..] {
            let (i, j) = (*i, *j);
            if !ctx.index.is_candidate(i, j) {
                continue;
            }
            let sim = ctx.similarity(i, j);
            if sim.score < cfg.quotation_similarity {
                continue;
            }

            let best = quotes_i
                .iter()
                .flat_map(|qa| quotes_j.iter().map(move |qb| (qa, qb)))
                .map(|(qa, qb)| (qa, qb, ctx.scorer.similarity(qa, qb).score))
                .max_by(|x, y| x.2.total_cmp(&y.2));
            let Some((qa, qb, quote_sim)) = best else {
                continue;
            };
            if quote_sim < cfg.quotation_match
                || quote_sim >= cfg.quotation_fidelity
                || text::normalize(qa) == text::normalize(qb)
            {
                continue;
            }

            let method = DetectionMethod::new(ContradictionType::Quotation, sim.strategy);
            if let Some(c) = ctx.finding((i, j), Severity::Medium, sim, 0.8 * quote_sim, method) {
                found.push(c.with_explanation(format!("quoted as \"{qa}\" and as \"{qb}\"")));
            }
        }
    }
    found
}
