//! Process scheduling domain models.
//!
//! Provides the data types shared by every scheduling discipline: the
//! per-process record, the validated workload that owns a set of them,
//! and the execution timeline an algorithm run produces.
//!
//! # Lifecycle
//!
//! | Stage | Owner | Mutates |
//! |-------|-------|---------|
//! | Generation | `WorkloadGenerator` | everything |
//! | Reset | `Workload::reset_all` / `Scheduler::run` | run state |
//! | Scheduling | one algorithm at a time | run state |
//! | Reporting | metrics, report | nothing |

mod process;
mod timeline;
mod workload;

pub use process::{ProcessRecord, ProcessStatus};
pub use timeline::{ExecutionSlice, Timeline};
pub use workload::Workload;
