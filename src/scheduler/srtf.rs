//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Algorithm
//!
//! Every time unit:
//! 1. Among eligible processes, pick the smallest remaining time
//!    (first in slice order on ties).
//! 2. Run it for exactly one unit.
//! 3. If its remaining time hits zero, complete it.
//!
//! The selection is recomputed at every unit boundary, so a newly arrived
//! shorter process preempts the running one.
//!
//! # Complexity
//! O(n · Σburst).

use tracing::{debug, trace};

use super::clock;
use crate::dispatching::{rules, select_first_min};
use crate::models::{ProcessRecord, ProcessStatus, Timeline};

/// Outcome of a single SRTF step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrtfStep {
    /// `pid` held the CPU during `[at, at + 1)`.
    Ran { pid: u32, at: i64, completed: bool },
    /// Nothing eligible; the clock jumped from `from` to `to`.
    Idle { from: i64, to: i64 },
}

/// An in-progress SRTF simulation that can be advanced one unit at a time.
///
/// # Example
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::SrtfRun;
///
/// let mut processes = vec![ProcessRecord::new(1, 0, 2, 1)];
/// let mut run = SrtfRun::new(&mut processes);
/// while run.step().is_some() {}
/// assert_eq!(run.time(), 2);
/// ```
#[derive(Debug)]
pub struct SrtfRun<'a> {
    processes: &'a mut [ProcessRecord],
    time: i64,
    pending: usize,
    running: Option<usize>,
    timeline: Timeline,
}

impl<'a> SrtfRun<'a> {
    /// Starts a run at t=0 over the given processes.
    pub fn new(processes: &'a mut [ProcessRecord]) -> Self {
        let pending = clock::pending_count(processes);
        Self {
            processes,
            time: 0,
            pending,
            running: None,
            timeline: Timeline::new(),
        }
    }

    /// Current simulation time.
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Read access to the processes mid-run.
    pub fn processes(&self) -> &[ProcessRecord] {
        &*self.processes
    }

    pub fn is_finished(&self) -> bool {
        self.pending == 0
    }

    /// Advances the simulation by one decision.
    ///
    /// Returns `None` once every process has completed.
    pub fn step(&mut self) -> Option<SrtfStep> {
        if self.pending == 0 {
            return None;
        }

        let Some(idx) = select_first_min(&*self.processes, self.time, &rules::ShortestRemaining)
        else {
            let to = clock::next_arrival(&*self.processes, self.time)?;
            let from = self.time;
            trace!(from, to, "cpu idle");
            self.time = to;
            return Some(SrtfStep::Idle { from, to });
        };

        if let Some(prev) = self.running.filter(|&prev| prev != idx) {
            self.processes[prev].status = ProcessStatus::Ready;
            debug!(
                preempted = self.processes[prev].pid,
                by = self.processes[idx].pid,
                at = self.time,
                "preemption"
            );
        }

        let at = self.time;
        let p = &mut self.processes[idx];
        p.dispatch(at);
        self.time += p.execute(1);
        self.timeline.record(p.pid, at, self.time);

        let completed = p.remaining_time == 0;
        if completed {
            p.complete(self.time);
            self.pending -= 1;
            self.running = None;
        } else {
            self.running = Some(idx);
        }

        Some(SrtfStep::Ran {
            pid: p.pid,
            at,
            completed,
        })
    }

    /// Runs to completion and returns the execution timeline.
    pub fn finish(mut self) -> Timeline {
        while self.step().is_some() {}
        self.timeline
    }
}

/// Shortest-Remaining-Time-First (preemptive, unit granularity).
pub fn schedule_srtf(processes: &mut [ProcessRecord]) -> Timeline {
    SrtfRun::new(processes).finish()
}
