//! Same topic, materially different counts.

use std::collections::BTreeMap;

use probity_core::models::{Contradiction, ContradictionType, DetectionMethod, Severity};

use super::DetectionContext;
use crate::extraction::quantities::{self, Quantity};

/// First value seen for each unit.
fn first_by_unit(qs: &[Quantity]) -> BTreeMap<&str, f64> {
    let mut by_unit = BTreeMap::new();
    for q in qs {
        by_unit.entry(q.unit.as_str()).or_insert(q.value);
    }
    by_unit
}

/// The shared unit with the largest relative difference.
pub fn largest_difference(a: &[Quantity], b: &[Quantity]) -> Option<(String, f64, f64, f64)> {
    let (ua, ub) = (first_by_unit(a), first_by_unit(b));
    ua.iter()
        .filter_map(|(unit, &va)| {
            let vb = *ub.get(unit)?;
            Some((unit.to_string(), va, vb, quantities::relative_difference(va, vb)))
        })
        .max_by(|x, y| x.3.total_cmp(&y.3))
}

pub fn detect(ctx: &DetectionContext<'_>) -> Vec<Contradiction> {
    let counted = &ctx.index.quantities;
    let mut found = Vec::new();

    for (n, (i, qi)) in counted.iter().enumerate() {
        for (j, qj) in &counted[n + 1..] {
            let (i, j) = (*i, *j);
            if !ctx.index.is_candidate(i, j) {
                continue;
            }
            let Some((unit, va, vb, diff)) = largest_difference(qi, qj) else {
                continue;
            };
            if diff <= ctx.config.value_relative_difference {
                continue;
            }
            let sim = ctx.similarity(i, j);
            if sim.score < ctx.config.value_similarity {
                continue;
            }

            let severity = if diff >= 0.5 {
                Severity::High
            } else {
                Severity::Medium
            };
            let method = DetectionMethod::new(ContradictionType::Value, sim.strategy);
            if let Some(c) = ctx.finding((i, j), severity, sim, sim.score, method) {
                found.push(c.with_explanation(format!(
                    "{va} {unit} vs {vb} {unit} ({:.0}% difference)",
                    diff * 100.0
                )));
            }
        }
    }
    found
}
