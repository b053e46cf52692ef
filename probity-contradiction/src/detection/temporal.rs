//! Same event placed at different dates.

use probity_core::models::{Contradiction, ContradictionType, DetectionMethod, Severity};
use probity_observability::events;

use super::DetectionContext;

/// Severity for a gap between two accounts of one event.
pub fn severity_for_gap(days: i64) -> Severity {
    match days {
        d if d >= 365 => Severity::High,
        d if d >= 30 => Severity::Medium,
        _ => Severity::Low,
    }
}

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<Contradiction> {
    let dated = &ctx.index.temporal;
    let mut found = Vec::new();

    for (n, (i, range_i)) in dated.iter().enumerate() {
        for (j, range_j) in &dated[n + 1..] {
            let (i, j) = (*i, *j);
            if !ctx.index.is_candidate(i, j) {
                continue;
            }
            if range_i.overlaps(range_j) {
                events::comparison_skipped("temporal", "date ranges overlap");
                continue;
            }
            let sim = ctx.similarity(i, j);
            if sim.score < ctx.config.temporal_similarity {
                continue;
            }

            let gap = range_i.gap_days(range_j);
            let method = DetectionMethod::new(ContradictionType::Temporal, sim.strategy);
            if let Some(c) = ctx.finding((i, j), severity_for_gap(gap), sim, sim.score, method) {
                found.push(
                    c.with_temporal_gap(gap).with_explanation(format!(
                        "'{}' is dated {} but '{}' is dated {} ({gap} days apart)",
                        ctx.claim(i).text,
                        range_i.start,
                        ctx.claim(j).text,
                        range_j.start
                    )),
                );
            }
        }
    }
    found
}
