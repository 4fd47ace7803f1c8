//! Greedy selection with first-in-order tie-breaking.

use super::SelectionRule;
use crate::models::ProcessRecord;

/// Returns the index of the eligible process with the lowest rule score.
///
/// Eligible = arrived by `time` and not done. Ties go to the process that
/// comes first in slice order (arrival order for a `Workload`), which
/// keeps every greedy discipline deterministic.
///
/// Returns `None` when nothing is eligible, i.e. the CPU is idle.
pub fn select_first_min(
    processes: &[ProcessRecord],
    time: i64,
    rule: &dyn SelectionRule,
) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;

    for (idx, p) in processes.iter().enumerate() {
        if !p.is_eligible(time) {
            continue;
        }
        let score = rule.evaluate(p);
        // Strict comparison keeps the earlier process on ties
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best.map(|(idx, _)| idx)
}
