//! Non-preemptive greedy dispatching (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Among processes that have arrived and are not done, pick the lowest
//!    rule score (first in slice order on ties).
//! 2. Run it to completion.
//! 3. If nothing is eligible, idle until the next arrival.
//!
//! # Complexity
//! O(n²): one linear selection per completed process.

use tracing::{debug, trace};

use super::clock;
use crate::dispatching::{rules, select_first_min, SelectionRule};
use crate::models::{ProcessRecord, Timeline};

/// Runs the greedy non-preemptive loop with an arbitrary selection rule.
pub fn schedule_non_preemptive(
    processes: &mut [ProcessRecord],
    rule: &dyn SelectionRule,
) -> Timeline {
    let mut timeline = Timeline::new();
    let mut time = 0;
    let mut pending = clock::pending_count(processes);

    while pending > 0 {
        let Some(idx) = select_first_min(processes, time, rule) else {
            match clock::next_arrival(processes, time) {
                Some(next) => {
                    trace!(from = time, to = next, "cpu idle");
                    time = next;
                    continue;
                }
                None => break,
            }
        };

        let p = &mut processes[idx];
        p.dispatch(time);
        let start = time;
        let units = p.remaining_time;
        time += p.execute(units);
        p.complete(time);
        timeline.record(p.pid, start, time);
        pending -= 1;

        debug!(rule = rule.name(), pid = p.pid, start, end = time, "dispatch");
    }

    timeline
}

/// Shortest-Job-First (non-preemptive).
pub fn schedule_sjf(processes: &mut [ProcessRecord]) -> Timeline {
    schedule_non_preemptive(processes, &rules::ShortestBurst)
}

/// Priority scheduling (non-preemptive, lower value first).
pub fn schedule_priority(processes: &mut [ProcessRecord]) -> Timeline {
    schedule_non_preemptive(processes, &rules::HighestPriority)
}
