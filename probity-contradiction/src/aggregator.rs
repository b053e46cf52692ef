//! Merge classifier output into one deduplicated, ordered report.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use probity_core::models::{Contradiction, ContradictionReport};

/// Report ordering: severity desc, confidence desc, pair, then type.
pub fn report_order(a: &Contradiction, b: &Contradiction) -> Ordering {
    b.severity
        .cmp(&a.severity)
        .then_with(|| b.confidence.total_cmp(&a.confidence))
        .then_with(|| a.claim_a_id.cmp(&b.claim_a_id))
        .then_with(|| a.claim_b_id.cmp(&b.claim_b_id))
        .then_with(|| a.contradiction_type.cmp(&b.contradiction_type))
}

/// Keep one finding per unordered claim pair. Batches arrive in
/// classifier priority order: the earlier finding stays unless a later one
/// is strictly more severe.
pub fn merge(batches: Vec<Vec<Contradiction>>) -> Vec<Contradiction> {
    let mut by_pair: BTreeMap<(String, String), Contradiction> = BTreeMap::new();

    for contradiction in batches.into_iter().flatten() {
        let key = (
            contradiction.claim_a_id.clone(),
            contradiction.claim_b_id.clone(),
        );
        match by_pair.get(&key) {
            Some(existing) if existing.severity >= contradiction.severity => {}
            _ => {
                by_pair.insert(key, contradiction);
            }
        }
    }

    let mut merged: Vec<Contradiction> = by_pair.into_values().collect();
    merged.sort_by(report_order);
    merged
}

/// Merge batches and wrap them in a report.
pub fn build_report(
    case_id: &str,
    claims_analysed: usize,
    batches: Vec<Vec<Contradiction>>,
) -> ContradictionReport {
    ContradictionReport::new(case_id, claims_analysed, merge(batches))
}
