//! CPU scheduling disciplines and KPI evaluation.
//!
//! Five single-CPU disciplines, each a deterministic discrete simulation
//! over a process slice advancing a monotonic clock:
//!
//! | Discipline | Preemptive | Key |
//! |------------|-----------|-----|
//! | FCFS | no | arrival order |
//! | SJF | no | burst time |
//! | Round-Robin | yes (quantum) | queue order |
//! | Priority | no | priority value |
//! | SRTF | yes (every unit) | remaining time |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::{ProcessRecord, Workload};
//! use u_cpusched::scheduler::{Algorithm, Scheduler};
//!
//! let mut workload = Workload::new(vec![
//!     ProcessRecord::new(1, 0, 5, 1),
//!     ProcessRecord::new(2, 0, 3, 1),
//! ]).unwrap();
//! let scheduler = Scheduler::new().with_time_quantum(4);
//! let timeline = scheduler.run(Algorithm::RoundRobin, workload.records_mut()).unwrap();
//! assert_eq!(timeline.end_time(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod clock;
mod fcfs;
mod greedy;
mod kpi;
mod round_robin;
mod srtf;

pub use clock::next_arrival;
pub use fcfs::schedule_fcfs;
pub use greedy::{schedule_non_preemptive, schedule_priority, schedule_sjf};
pub use kpi::ScheduleMetrics;
pub use round_robin::schedule_round_robin;
pub use srtf::{schedule_srtf, SrtfRun, SrtfStep};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SchedError};
use crate::models::{ProcessRecord, Timeline};

/// Default Round-Robin time quantum.
pub const DEFAULT_TIME_QUANTUM: i64 = 4;

/// A scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin,
    /// Priority (non-preemptive, lower value first).
    Priority,
    /// Shortest-Remaining-Time-First.
    Srtf,
}

impl Algorithm {
    /// All disciplines, in comparison-table order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
        Algorithm::Srtf,
    ];

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Priority => "Priority",
            Algorithm::Srtf => "SRTF",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin | Algorithm::Srtf)
    }

    /// One-line characterization of the discipline's trade-offs.
    pub fn summary(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => {
                "Simple to implement but can have high waiting time, especially for short processes."
            }
            Algorithm::Sjf => {
                "Minimizes waiting time for short processes but can lead to starvation for long processes."
            }
            Algorithm::RoundRobin => {
                "Fairly distributes CPU time but can have high waiting time if the time quantum is not optimal."
            }
            Algorithm::Priority => {
                "Processes with higher priority are scheduled first, which can cause starvation for low-priority processes."
            }
            Algorithm::Srtf => {
                "Efficient for minimizing waiting time but complex to implement and can cause starvation for long processes."
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "rr" | "roundrobin" => Ok(Algorithm::RoundRobin),
            "priority" | "prio" => Ok(Algorithm::Priority),
            "srtf" => Ok(Algorithm::Srtf),
            _ => Err(SchedError::InvalidConfig(format!("unknown algorithm '{s}'"))),
        }
    }
}

/// Runs disciplines over a process slice with reset-before-run semantics.
///
/// Holds the per-invocation parameters (currently the Round-Robin quantum).
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::{Algorithm, Scheduler};
///
/// let mut processes = vec![
///     ProcessRecord::new(1, 0, 5, 1),
///     ProcessRecord::new(2, 1, 3, 1),
/// ];
/// Scheduler::new().run(Algorithm::Fcfs, &mut processes).unwrap();
/// assert_eq!(processes[1].completion_time, Some(8));
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    time_quantum: i64,
}

impl Scheduler {
    /// Creates a scheduler with the default quantum.
    pub fn new() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
        }
    }

    /// Sets the Round-Robin time quantum. Validated when RR runs.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    pub fn time_quantum(&self) -> i64 {
        self.time_quantum
    }

    /// Resets every record, then runs `algorithm` over them.
    ///
    /// The slice must be sorted by arrival time; a
    /// [`Workload`](crate::models::Workload) guarantees this.
    ///
    /// # Errors
    /// [`SchedError::InvalidQuantum`] for Round-Robin with a quantum <= 0,
    /// reported before any record is touched.
    pub fn run(&self, algorithm: Algorithm, processes: &mut [ProcessRecord]) -> Result<Timeline> {
        if algorithm == Algorithm::RoundRobin && self.time_quantum <= 0 {
            return Err(SchedError::InvalidQuantum(self.time_quantum));
        }

        for p in processes.iter_mut() {
            p.reset();
        }

        let timeline = match algorithm {
            Algorithm::Fcfs => schedule_fcfs(processes),
            Algorithm::Sjf => schedule_sjf(processes),
            Algorithm::RoundRobin => schedule_round_robin(processes, self.time_quantum)?,
            Algorithm::Priority => schedule_priority(processes),
            Algorithm::Srtf => schedule_srtf(processes),
        };

        info!(
            algorithm = algorithm.name(),
            processes = processes.len(),
            makespan = timeline.end_time(),
            switches = timeline.context_switches(),
            "schedule complete"
        );

        Ok(timeline)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
