//! Idle-time handling.
//!
//! When no process is eligible the CPU idles until the next arrival.
//! Jumping straight to that arrival gives the same schedule as ticking
//! one unit at a time, because nothing can become eligible in between.

use crate::models::ProcessRecord;

/// Earliest arrival strictly after `time` among processes that are not done.
///
/// Returns `None` when no such process exists.
pub fn next_arrival(processes: &[ProcessRecord], time: i64) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_done() && p.arrival_time > time)
        .map(|p| p.arrival_time)
        .min()
}

/// Number of processes that still need the CPU.
pub fn pending_count(processes: &[ProcessRecord]) -> usize {
    processes.iter().filter(|p| !p.is_done()).count()
}
