//! Simulation configuration.
//!
//! Everything a comparison run needs, loadable from a JSON file. Missing
//! fields take their defaults, so `{}` is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::generator::WorkloadConfig;
use crate::scheduler::{Algorithm, DEFAULT_TIME_QUANTUM};

/// Full configuration of a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Random workload parameters.
    pub workload: WorkloadConfig,
    /// Round-Robin time quantum (must be > 0).
    pub time_quantum: i64,
    /// Disciplines to compare, in report order.
    pub algorithms: Vec<Algorithm>,
    /// Run each discipline on its own thread over a private copy.
    pub concurrent: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            workload: WorkloadConfig::default(),
            time_quantum: DEFAULT_TIME_QUANTUM,
            algorithms: Algorithm::ALL.to_vec(),
            concurrent: false,
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// PID whose individual metrics are reported.
    ///
    /// Always the injected transient process, so the reported row and the
    /// generated record cannot drift apart.
    pub fn transient_pid(&self) -> u32 {
        self.workload.transient.pid
    }

    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Rejects values no run could use.
    pub fn validate(&self) -> Result<()> {
        if self.time_quantum <= 0 {
            return Err(SchedError::InvalidQuantum(self.time_quantum));
        }
        if self.algorithms.is_empty() {
            return Err(SchedError::InvalidConfig("no algorithms selected".into()));
        }
        self.workload.validate()
    }
}
