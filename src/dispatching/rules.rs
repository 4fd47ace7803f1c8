//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::ProcessRecord;

/// Shortest burst time (non-preemptive SJF key).
///
/// Minimizes average waiting time when all jobs are available at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value) First"
    }
}

/// Shortest remaining time (preemptive SRTF key).
///
/// Re-evaluated every time unit, so the value changes as the
/// running process consumes CPU.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &ProcessRecord) -> RuleScore {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores() {
        let mut p = ProcessRecord::new(1, 0, 9, 4);
        p.remaining_time = 2;

        assert_eq!(ShortestBurst.evaluate(&p), 9);
        assert_eq!(HighestPriority.evaluate(&p), 4);
        assert_eq!(ShortestRemaining.evaluate(&p), 2);
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Time First");
    }
}
