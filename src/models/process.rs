//! Process (job) model.
//!
//! A process is a unit of CPU demand: it becomes eligible at its arrival
//! time and needs `burst_time` units of CPU before it completes.
//!
//! # Time Representation
//! All times are abstract, integer time units relative to the simulation
//! epoch (t=0). One unit is the granularity of SRTF preemption.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Lifecycle state of a process within one algorithm run.
///
/// Replaces "is it in the completed list / in the queue" scans with an
/// O(1) tag check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProcessStatus {
    /// Not yet admitted (may or may not have arrived).
    #[default]
    Waiting,
    /// Admitted and waiting for the CPU.
    Ready,
    /// Currently holding the CPU.
    Running,
    /// All burst time consumed.
    Done,
}

/// A simulated process.
///
/// `pid`, `arrival_time`, `burst_time` and `priority` are fixed at generation
/// time. Everything else is per-run state owned by the algorithm that is
/// currently executing; call [`ProcessRecord::reset`] before each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProcessRecord")]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub pid: u32,
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required (>= 1).
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// CPU time still required.
    pub remaining_time: i64,
    /// First dispatch instant.
    pub start_time: Option<i64>,
    /// Instant the last unit of burst time was consumed.
    pub completion_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<i64>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Option<i64>,
    /// Run-state tag.
    pub status: ProcessStatus,
}

/// Wire form of [`ProcessRecord`].
///
/// Only the four input fields are required. Missing run state starts from
/// the fresh-process values, so `remaining_time` defaults to `burst_time`.
#[derive(Deserialize)]
struct RawProcessRecord {
    pid: u32,
    arrival_time: i64,
    burst_time: i64,
    priority: i32,
    #[serde(default)]
    remaining_time: Option<i64>,
    #[serde(default)]
    start_time: Option<i64>,
    #[serde(default)]
    completion_time: Option<i64>,
    #[serde(default)]
    waiting_time: Option<i64>,
    #[serde(default)]
    turnaround_time: Option<i64>,
    #[serde(default)]
    status: ProcessStatus,
}

impl From<RawProcessRecord> for ProcessRecord {
    fn from(raw: RawProcessRecord) -> Self {
        let mut record =
            ProcessRecord::new(raw.pid, raw.arrival_time, raw.burst_time, raw.priority);
        if let Some(remaining) = raw.remaining_time {
            record.remaining_time = remaining;
        }
        record.start_time = raw.start_time;
        record.completion_time = raw.completion_time;
        record.waiting_time = raw.waiting_time;
        record.turnaround_time = raw.turnaround_time;
        record.status = raw.status;
        record
    }
}

impl ProcessRecord {
    /// Creates a fresh process with its run state already reset.
    pub fn new(pid: u32, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
            status: ProcessStatus::Waiting,
        }
    }

    /// Restores the pre-run state, discarding any previously computed times.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.completion_time = None;
        self.waiting_time = None;
        self.turnaround_time = None;
        self.status = ProcessStatus::Waiting;
    }

    /// Whether the process is eligible at `time` and still needs the CPU.
    #[inline]
    pub fn is_eligible(&self, time: i64) -> bool {
        self.arrival_time <= time && self.status != ProcessStatus::Done
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.status == ProcessStatus::Done
    }

    /// Records the first dispatch. Later dispatches keep the original start.
    pub fn dispatch(&mut self, time: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
        self.status = ProcessStatus::Running;
    }

    /// Consumes up to `units` of remaining time and returns how many were used.
    pub fn execute(&mut self, units: i64) -> i64 {
        let used = units.min(self.remaining_time);
        self.remaining_time -= used;
        used
    }

    /// Marks the process complete at `time` and derives turnaround/waiting.
    pub fn complete(&mut self, time: i64) {
        debug_assert_eq!(self.remaining_time, 0, "pid {} completed early", self.pid);
        let turnaround = time - self.arrival_time;
        self.completion_time = Some(time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
        self.status = ProcessStatus::Done;
    }

    /// Whether every time field of the run has been filled in.
    pub fn is_fully_scheduled(&self) -> bool {
        self.start_time.is_some()
            && self.completion_time.is_some()
            && self.waiting_time.is_some()
            && self.turnaround_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_is_reset() {
        let p = ProcessRecord::new(7, 3, 5, 2);
        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.status, ProcessStatus::Waiting);
        assert!(p.start_time.is_none());
        assert!(!p.is_fully_scheduled());
    }

    #[test]
    fn test_lifecycle() {
        let mut p = ProcessRecord::new(1, 2, 4, 1);
        assert!(!p.is_eligible(1));
        assert!(p.is_eligible(2));

        p.dispatch(5);
        assert_eq!(p.execute(10), 4);
        assert_eq!(p.remaining_time, 0);
        p.complete(9);

        assert_eq!(p.start_time, Some(5));
        assert_eq!(p.completion_time, Some(9));
        assert_eq!(p.turnaround_time, Some(7));
        assert_eq!(p.waiting_time, Some(3));
        assert!(p.is_done());
        assert!(!p.is_eligible(100));
        assert!(p.is_fully_scheduled());
    }

    #[test]
    fn test_dispatch_keeps_first_start() {
        let mut p = ProcessRecord::new(1, 0, 4, 1);
        p.dispatch(0);
        p.execute(2);
        p.status = ProcessStatus::Ready;
        p.dispatch(6);
        assert_eq!(p.start_time, Some(0));
    }

    #[test]
    fn test_reset_clears_run_state() {
        let mut p = ProcessRecord::new(1, 0, 3, 1);
        p.dispatch(0);
        p.execute(3);
        p.complete(3);

        p.reset();
        assert_eq!(p, ProcessRecord::new(1, 0, 3, 1));
    }

    #[test]
    fn test_deserialize_immutable_fields_only() {
        let p: ProcessRecord =
            serde_json::from_str(r#"{"pid":4,"arrival_time":1,"burst_time":6,"priority":3}"#)
                .unwrap();
        assert_eq!(p.pid, 4);
        assert_eq!(p.burst_time, 6);
        assert_eq!(p.remaining_time, 6);
        assert_eq!(p.status, ProcessStatus::Waiting);
        assert!(p.completion_time.is_none());
        assert_eq!(p, ProcessRecord::new(4, 1, 6, 3));
    }

    #[test]
    fn test_serialized_run_state_survives() {
        let mut p = ProcessRecord::new(2, 0, 3, 1);
        p.dispatch(1);
        p.execute(1);
        p.status = ProcessStatus::Ready;

        let json = serde_json::to_string(&p).unwrap();
        let back: ProcessRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.remaining_time, 2);
    }
}
