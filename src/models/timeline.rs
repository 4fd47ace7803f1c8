//! Execution timeline (what ran on the CPU, and when).
//!
//! The start/completion pair of a `ProcessRecord` hides preemption. A
//! timeline keeps every contiguous slice of CPU time, so RR and SRTF
//! schedules can be inspected and checked for overlap.

use serde::{Deserialize, Serialize};

/// A contiguous interval `[start, end)` during which `pid` held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    pub pid: u32,
    pub start: i64,
    pub end: i64,
}

impl ExecutionSlice {
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered list of execution slices for one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub slices: Vec<ExecutionSlice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice, merging it into the previous one when the same
    /// process continues without a gap.
    pub fn record(&mut self, pid: u32, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(ExecutionSlice { pid, start, end });
    }

    /// Total CPU-busy time.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// End of the last slice (0 if empty).
    pub fn end_time(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Number of times the CPU switched to a different process.
    pub fn context_switches(&self) -> usize {
        self.slices.len().saturating_sub(1)
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, pid: u32) -> impl Iterator<Item = &ExecutionSlice> {
        self.slices.iter().filter(move |s| s.pid == pid)
    }

    /// Whether slices are ordered and never overlap.
    pub fn is_consistent(&self) -> bool {
        self.slices
            .windows(2)
            .all(|w| w[0].end <= w[1].start && w[0].start < w[0].end)
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
