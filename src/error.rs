//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced at the configuration and workload boundaries.
///
/// The scheduling loops themselves never fail on a validated workload.
#[derive(Debug, Error)]
pub enum SchedError {
    /// Round-Robin time quantum must be positive.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// The process set violates the workload contract.
    #[error("invalid workload: {}", format_errors(.0))]
    InvalidWorkload(Vec<ValidationError>),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SchedError>;
