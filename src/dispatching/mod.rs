//! Selection rules for greedy CPU dispatching.
//!
//! SJF, Priority and SRTF share one decision: "among the eligible
//! processes, pick the one with the smallest key, and the first one in
//! iteration order on ties". The key is a [`SelectionRule`]; the decision
//! itself is [`select_first_min`].
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_first_min};
//! use u_cpusched::models::ProcessRecord;
//!
//! let processes = vec![
//!     ProcessRecord::new(1, 0, 8, 2),
//!     ProcessRecord::new(2, 0, 3, 1),
//! ];
//! assert_eq!(select_first_min(&processes, 0, &rules::ShortestBurst), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod engine;
pub mod rules;

pub use engine::select_first_min;

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A rule that ranks eligible processes.
///
/// # Score Convention
/// **Lower score = higher precedence.** Rules should return smaller values
/// for processes that should run first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates a process at the current point of the simulation.
    fn evaluate(&self, process: &ProcessRecord) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
