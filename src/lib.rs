//! CPU process scheduling simulator.
//!
//! Computes, for five classic single-CPU disciplines, the execution
//! timeline of a process workload and the resulting waiting/turnaround
//! metrics, then compares the disciplines side by side.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `ProcessStatus`,
//!   `Workload`, `Timeline`
//! - **`validation`**: Workload contract checks (duplicate PIDs, bursts, arrivals)
//! - **`dispatching`**: Selection rules and the shared first-minimum tie-break
//! - **`scheduler`**: FCFS, SJF, Round-Robin, Priority, SRTF and `ScheduleMetrics`
//! - **`generator`**: Random workload generation with a fixed transient process
//! - **`comparison`**: Sequential (reset) or concurrent (copy) multi-discipline runs
//! - **`report`**: Comparison table, conclusions, text Gantt charts
//! - **`config`**: JSON-loadable simulation configuration
//!
//! # Architecture
//!
//! The scheduling core (`models`, `dispatching`, `scheduler`) is
//! deterministic and has no RNG or I/O. Generation and reporting sit
//! around it and only produce its input or consume its output.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod comparison;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{Result, SchedError};
