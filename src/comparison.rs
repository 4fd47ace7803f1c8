//! Cross-discipline comparison.
//!
//! Runs several disciplines over the same workload and collects per-run
//! metrics, timeline and a snapshot of the scheduled records.
//!
//! Two strategies produce identical outcomes:
//! - [`compare`]: one shared workload, reset before every run.
//! - [`compare_concurrent`]: one scoped thread per discipline, each over
//!   its own clone of the workload.

use std::thread;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::{ProcessRecord, Timeline, Workload};
use crate::scheduler::{Algorithm, ScheduleMetrics, Scheduler};

/// Result of running one discipline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmOutcome {
    pub algorithm: Algorithm,
    pub metrics: ScheduleMetrics,
    pub timeline: Timeline,
    /// Records as they were when the run finished.
    pub processes: Vec<ProcessRecord>,
}

impl AlgorithmOutcome {
    fn capture(
        algorithm: Algorithm,
        timeline: Timeline,
        processes: &[ProcessRecord],
        transient_pid: u32,
    ) -> Self {
        Self {
            algorithm,
            metrics: ScheduleMetrics::calculate(processes, transient_pid),
            timeline,
            processes: processes.to_vec(),
        }
    }
}

/// Runs each discipline in order on the shared workload.
///
/// The workload is left holding the state of the last run.
pub fn compare(
    workload: &mut Workload,
    algorithms: &[Algorithm],
    scheduler: &Scheduler,
    transient_pid: u32,
) -> Result<Vec<AlgorithmOutcome>> {
    let mut outcomes = Vec::with_capacity(algorithms.len());

    for &algorithm in algorithms {
        let timeline = scheduler.run(algorithm, workload.records_mut())?;
        let outcome =
            AlgorithmOutcome::capture(algorithm, timeline, workload.records(), transient_pid);
        info!(
            algorithm = algorithm.name(),
            avg_waiting = outcome.metrics.avg_waiting_time,
            avg_turnaround = outcome.metrics.avg_turnaround_time,
            "algorithm evaluated"
        );
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Runs each discipline on its own thread over a private copy.
///
/// Outcomes are returned in the order of `algorithms`. The input workload
/// is never mutated.
pub fn compare_concurrent(
    workload: &Workload,
    algorithms: &[Algorithm],
    scheduler: &Scheduler,
    transient_pid: u32,
) -> Result<Vec<AlgorithmOutcome>> {
    thread::scope(|scope| {
        let handles: Vec<_> = algorithms
            .iter()
            .map(|&algorithm| {
                let mut copy = workload.clone();
                scope.spawn(move || -> Result<AlgorithmOutcome> {
                    let timeline = scheduler.run(algorithm, copy.records_mut())?;
                    Ok(AlgorithmOutcome::capture(
                        algorithm,
                        timeline,
                        copy.records(),
                        transient_pid,
                    ))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(outcome) => outcome,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
