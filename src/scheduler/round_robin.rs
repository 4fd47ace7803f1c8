//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. The ready queue starts with every process arriving at t=0.
//! 2. Dequeue the head and run it for `min(remaining, quantum)` units.
//! 3. If it finished, complete it; otherwise re-enqueue it at the tail.
//! 4. Then admit, in slice order, every process that has arrived by now
//!    and was never admitted.
//!
//! Step 3 before step 4 is the tie-break: a preempted process goes back
//! in line ahead of processes that arrived during its slice.
//!
//! If the queue drains while processes are still to arrive, the CPU idles
//! until the next arrival and admission resumes from there.
//!
//! # Complexity
//! O(n · Σburst / quantum) for admission scans.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::clock;
use crate::error::{Result, SchedError};
use crate::models::{ProcessRecord, ProcessStatus, Timeline};

/// Round-Robin scheduling.
///
/// # Errors
/// [`SchedError::InvalidQuantum`] if `quantum <= 0`; no process is touched.
pub fn schedule_round_robin(processes: &mut [ProcessRecord], quantum: i64) -> Result<Timeline> {
    if quantum <= 0 {
        return Err(SchedError::InvalidQuantum(quantum));
    }

    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut time = 0;
    admit(processes, time, &mut queue);

    loop {
        let Some(idx) = queue.pop_front() else {
            match clock::next_arrival(processes, time) {
                Some(next) => {
                    trace!(from = time, to = next, "cpu idle");
                    time = next;
                    admit(processes, time, &mut queue);
                    continue;
                }
                None => break,
            }
        };

        let p = &mut processes[idx];
        p.dispatch(time);
        let start = time;
        time += p.execute(quantum);
        timeline.record(p.pid, start, time);

        if p.remaining_time == 0 {
            p.complete(time);
            debug!(pid = p.pid, start, end = time, "rr slice, completed");
        } else {
            p.status = ProcessStatus::Ready;
            queue.push_back(idx);
            debug!(pid = p.pid, start, end = time, remaining = p.remaining_time, "rr slice, requeued");
        }

        admit(processes, time, &mut queue);
    }

    Ok(timeline)
}

/// Enqueues every arrived, never-admitted process with work left.
fn admit(processes: &mut [ProcessRecord], time: i64, queue: &mut VecDeque<usize>) {
    for (idx, p) in processes.iter_mut().enumerate() {
        if p.status == ProcessStatus::Waiting && p.arrival_time <= time && p.remaining_time > 0 {
            p.status = ProcessStatus::Ready;
            queue.push_back(idx);
        }
    }
}
