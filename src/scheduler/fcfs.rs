//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! Visit processes in slice (arrival) order. Each one starts at
//! `max(clock, arrival)` and runs to completion.
//!
//! # Complexity
//! O(n).

use tracing::debug;

use crate::models::{ProcessRecord, Timeline};

/// Schedules `processes` in slice order without preemption.
///
/// The slice must already be sorted by arrival time, as a
/// [`Workload`](crate::models::Workload) is.
pub fn schedule_fcfs(processes: &mut [ProcessRecord]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut time = 0;

    for p in processes.iter_mut() {
        time = time.max(p.arrival_time);
        p.dispatch(time);
        let start = time;
        let units = p.remaining_time;
        time += p.execute(units);
        p.complete(time);
        timeline.record(p.pid, start, time);
        debug!(pid = p.pid, start, end = time, "fcfs dispatch");
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_order_respected() {
        let mut processes = vec![ProcessRecord::new(1, 0, 5, 1), ProcessRecord::new(2, 1, 3, 1)];
        schedule_fcfs(&mut processes);

        assert_eq!(processes[0].start_time, Some(0));
        assert_eq!(processes[0].completion_time, Some(5));
        assert_eq!(processes[1].start_time, Some(5));
        assert_eq!(processes[1].completion_time, Some(8));
        assert_eq!(processes[1].waiting_time, Some(4));
    }

    #[test]
    fn test_idle_gap() {
        let mut processes = vec![ProcessRecord::new(1, 0, 2, 1), ProcessRecord::new(2, 10, 3, 1)];
        let timeline = schedule_fcfs(&mut processes);

        assert_eq!(processes[1].start_time, Some(10));
        assert_eq!(processes[1].completion_time, Some(13));
        assert_eq!(processes[1].waiting_time, Some(0));
        assert_eq!(timeline.busy_time(), 5);
    }

    #[test]
    fn test_short_job_waits_behind_long() {
        // Convoy effect: p2 arrives just after p1 but must wait 19 units
        let mut processes = vec![ProcessRecord::new(1, 0, 20, 1), ProcessRecord::new(2, 1, 1, 1)];
        schedule_fcfs(&mut processes);
        assert_eq!(processes[1].waiting_time, Some(19));
    }

    #[test]
    fn test_empty() {
        let timeline = schedule_fcfs(&mut []);
        assert!(timeline.is_empty());
    }
}
