//! Synthetic workload generation.
//!
//! Samples random processes and injects one fixed "transient" process so
//! the same workload element can be compared across disciplines and runs.
//!
//! # Defaults
//!
//! | Field | Range |
//! |-------|-------|
//! | arrival | 0..=100 |
//! | burst | 1..=20 |
//! | priority | 1..=10 |
//! | transient | pid 67, arrival 50, burst 10, priority 1 |

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SchedError};
use crate::models::{ProcessRecord, Workload};

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.min..=self.max)
    }
}

/// The fixed process injected into every generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransientSpec {
    pub pid: u32,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: i32,
}

impl Default for TransientSpec {
    fn default() -> Self {
        Self {
            pid: 67,
            arrival_time: 50,
            burst_time: 10,
            priority: 1,
        }
    }
}

impl TransientSpec {
    pub fn to_record(&self) -> ProcessRecord {
        ProcessRecord::new(self.pid, self.arrival_time, self.burst_time, self.priority)
    }
}

/// Parameters for random workload generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of random processes (the transient one is extra).
    pub process_count: usize,
    pub arrival_range: IntRange,
    pub burst_range: IntRange,
    pub priority_range: IntRange,
    /// RNG seed. `None` = seeded from the OS.
    pub seed: Option<u64>,
    pub transient: TransientSpec,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            process_count: 66,
            arrival_range: IntRange::new(0, 100),
            burst_range: IntRange::new(1, 20),
            priority_range: IntRange::new(1, 10),
            seed: None,
            transient: TransientSpec::default(),
        }
    }
}

impl WorkloadConfig {
    /// Sets the process count.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets a fixed seed for reproducible workloads.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every range is non-empty and within the workload contract.
    pub fn validate(&self) -> Result<()> {
        for (name, range) in [
            ("arrival_range", self.arrival_range),
            ("burst_range", self.burst_range),
            ("priority_range", self.priority_range),
        ] {
            if range.min > range.max {
                return Err(SchedError::InvalidConfig(format!(
                    "{name} is empty ({}..={})",
                    range.min, range.max
                )));
            }
        }
        if self.arrival_range.min < 0 {
            return Err(SchedError::InvalidConfig(
                "arrival_range must not start before 0".into(),
            ));
        }
        if self.burst_range.min < 1 {
            return Err(SchedError::InvalidConfig(
                "burst_range must start at 1 or above".into(),
            ));
        }
        if i32::try_from(self.priority_range.min).is_err()
            || i32::try_from(self.priority_range.max).is_err()
        {
            return Err(SchedError::InvalidConfig(
                "priority_range must fit in i32".into(),
            ));
        }
        Ok(())
    }
}

/// Random workload generator.
///
/// # Example
/// ```
/// use u_cpusched::generator::{WorkloadConfig, WorkloadGenerator};
///
/// let config = WorkloadConfig::default().with_process_count(10).with_seed(7);
/// let workload = WorkloadGenerator::new(config).generate().unwrap();
/// assert_eq!(workload.len(), 11);
/// assert!(workload.find(67).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    config: WorkloadConfig,
}

impl WorkloadGenerator {
    pub fn new(config: WorkloadConfig) -> Self {
        Self { config }
    }

    /// Generates a workload using the configured seed (or OS entropy).
    pub fn generate(&self) -> Result<Workload> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.generate_with(&mut rng)
    }

    /// Generates a workload from the given RNG.
    ///
    /// Random processes get PIDs `0, 1, 2, ...`, skipping the transient PID.
    /// The transient record is appended last, so after the stable arrival
    /// sort it follows any random process with the same arrival time.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Workload> {
        self.config.validate()?;

        let transient = self.config.transient;
        let mut processes = Vec::with_capacity(self.config.process_count + 1);
        let pids = (0u32..).filter(|&pid| pid != transient.pid);

        for pid in pids.take(self.config.process_count) {
            let arrival = self.config.arrival_range.sample(rng);
            let burst = self.config.burst_range.sample(rng);
            // Range checked to fit i32 in validate()
            let priority = self.config.priority_range.sample(rng) as i32;
            processes.push(ProcessRecord::new(pid, arrival, burst, priority));
        }
        processes.push(transient.to_record());

        debug!(
            processes = processes.len(),
            transient_pid = transient.pid,
            "generated workload"
        );

        Workload::new(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_ranges() {
        let config = WorkloadConfig::default().with_seed(42);
        let workload = WorkloadGenerator::new(config.clone()).generate().unwrap();

        assert_eq!(workload.len(), 67);
        for p in workload.records().iter().filter(|p| p.pid != 67) {
            assert!(config.arrival_range.contains(p.arrival_time));
            assert!(config.burst_range.contains(p.burst_time));
            assert!(config.priority_range.contains(i64::from(p.priority)));
        }
    }

    #[test]
    fn test_transient_present() {
        let workload = WorkloadGenerator::new(WorkloadConfig::default().with_seed(1))
            .generate()
            .unwrap();
        let t = workload.find(67).unwrap();
        assert_eq!((t.arrival_time, t.burst_time, t.priority), (50, 10, 1));
    }

    #[test]
    fn test_sorted_by_arrival() {
        let workload = WorkloadGenerator::new(WorkloadConfig::default().with_seed(3))
            .generate()
            .unwrap();
        assert!(workload
            .records()
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
    }

    #[test]
    fn test_reproducible_with_seed() {
        let config = WorkloadConfig::default().with_seed(99);
        let a = WorkloadGenerator::new(config.clone()).generate().unwrap();
        let b = WorkloadGenerator::new(config).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_with_rng() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(WorkloadConfig::default().with_process_count(5));
        let workload = generator.generate_with(&mut rng).unwrap();
        assert_eq!(workload.len(), 6);
    }

    #[test]
    fn test_pid_skips_transient() {
        let config = WorkloadConfig::default().with_process_count(100).with_seed(5);
        let workload = WorkloadGenerator::new(config).generate().unwrap();
        // 100 random + transient, all unique (validated), max random pid = 100
        assert_eq!(workload.len(), 101);
        assert!(workload.find(100).is_some());
    }

    #[test]
    fn test_zero_processes() {
        let config = WorkloadConfig::default().with_process_count(0).with_seed(5);
        let workload = WorkloadGenerator::new(config).generate().unwrap();
        assert_eq!(workload.len(), 1);
    }

    #[test]
    fn test_invalid_config() {
        let mut config = WorkloadConfig::default();
        config.burst_range = IntRange::new(0, 5);
        assert!(matches!(config.validate(), Err(SchedError::InvalidConfig(_))));

        config.burst_range = IntRange::new(5, 1);
        assert!(WorkloadGenerator::new(config).generate().is_err());
    }

    #[test]
    fn test_config_partial_json() {
        let config: WorkloadConfig =
            serde_json::from_str(r#"{"process_count": 3, "seed": 11}"#).unwrap();
        assert_eq!(config.process_count, 3);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.burst_range, IntRange::new(1, 20));
    }
}
