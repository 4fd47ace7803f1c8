//! Workload (validated process set).
//!
//! The algorithms accept any `&mut [ProcessRecord]`, but they rely on the
//! slice being sorted by arrival time with unique PIDs and positive bursts.
//! `Workload` is the type that guarantees it.

use serde::Serialize;

use super::ProcessRecord;
use crate::error::{Result, SchedError};
use crate::validation::validate_processes;

/// An arrival-sorted, validated set of processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workload {
    processes: Vec<ProcessRecord>,
}

impl Workload {
    /// Validates, stable-sorts by arrival time and resets the given records.
    ///
    /// Processes with equal arrival time keep their relative order, which
    /// is the tie-break order every algorithm uses.
    pub fn new(mut processes: Vec<ProcessRecord>) -> Result<Self> {
        validate_processes(&processes).map_err(SchedError::InvalidWorkload)?;
        processes.sort_by_key(|p| p.arrival_time);
        for p in &mut processes {
            p.reset();
        }
        Ok(Self { processes })
    }

    /// Loads a workload from a JSON array of processes.
    pub fn from_json(json: &str) -> Result<Self> {
        let processes: Vec<ProcessRecord> = serde_json::from_str(json)?;
        Self::new(processes)
    }

    /// Resets the run state of every process.
    pub fn reset_all(&mut self) {
        for p in &mut self.processes {
            p.reset();
        }
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// Mutable access for the scheduling algorithms.
    ///
    /// Only run state should be mutated; the slice cannot be reordered
    /// or resized through this handle.
    pub fn records_mut(&mut self) -> &mut [ProcessRecord] {
        &mut self.processes
    }

    pub fn find(&self, pid: u32) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times (minimum possible makespan after t=0).
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }
}
