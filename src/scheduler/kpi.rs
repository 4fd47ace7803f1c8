//! Schedule quality metrics.
//!
//! Reduces a scheduled process set to the indicators used to compare
//! disciplines.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Mean of (turnaround - burst) |
//! | Avg Turnaround Time | Mean of (completion - arrival) |
//! | Transient Waiting/Turnaround | Same, for one designated PID |
//! | Makespan | Latest completion time |
//! | Max Waiting Time | Longest single wait |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Scheduling performance indicators for one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Mean waiting time over all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over all processes.
    pub avg_turnaround_time: f64,
    /// Waiting time of the transient process, if present.
    pub transient_waiting_time: Option<i64>,
    /// Turnaround time of the transient process, if present.
    pub transient_turnaround_time: Option<i64>,
    /// Latest completion time (0 if nothing completed).
    pub makespan: i64,
    /// Longest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Number of processes that completed.
    pub completed: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from a scheduled process set.
    ///
    /// Processes without computed times count as zero in the sums but
    /// still count in the denominator. An empty set yields zero averages.
    ///
    /// # Arguments
    /// * `processes` - Records after one algorithm run.
    /// * `transient_pid` - PID whose individual metrics are reported.
    pub fn calculate(processes: &[ProcessRecord], transient_pid: u32) -> Self {
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut max_waiting: i64 = 0;
        let mut makespan: i64 = 0;
        let mut completed: usize = 0;

        for p in processes {
            let waiting = p.waiting_time.unwrap_or(0);
            total_waiting += waiting;
            total_turnaround += p.turnaround_time.unwrap_or(0);
            max_waiting = max_waiting.max(waiting);

            if let Some(completion) = p.completion_time {
                makespan = makespan.max(completion);
                completed += 1;
            }
        }

        let (avg_waiting_time, avg_turnaround_time) = if processes.is_empty() {
            (0.0, 0.0)
        } else {
            let n = processes.len() as f64;
            (total_waiting as f64 / n, total_turnaround as f64 / n)
        };

        let transient = processes.iter().find(|p| p.pid == transient_pid);

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            transient_waiting_time: transient.and_then(|p| p.waiting_time),
            transient_turnaround_time: transient.and_then(|p| p.turnaround_time),
            makespan,
            max_waiting_time: max_waiting,
            completed,
        }
    }

    /// Fraction of the makespan the CPU was busy (0.0 if makespan is 0).
    pub fn cpu_utilization(&self, total_burst: i64) -> f64 {
        if self.makespan == 0 {
            0.0
        } else {
            total_burst as f64 / self.makespan as f64
        }
    }
}
