/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::data_structures::InlineString;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler precondition violations with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("CPU burst {burst} of process {id} must be positive")]
    #[diagnostic(
        code(scheduler::invalid_burst),
        help("Every process needs a non-zero first and second CPU burst.")
    )]
    InvalidBurst { id: InlineString, burst: u8 },

    #[error("Process id {0} appears more than once in the batch")]
    #[diagnostic(
        code(scheduler::duplicate_identity),
        help("Process ids break dispatch ties and must be unique within a batch.")
    )]
    DuplicateIdentity(InlineString),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The quantum is the longest slice a process may run and must be at least 1.")
    )]
    InvalidQuantum(u64),

    #[error("Invalid value '{value}' for {setting}")]
    #[diagnostic(
        code(scheduler::invalid_setting),
        help("Quantum is a positive integer; I/O completion is full_scan or head_only; ready order is rotating or strict.")
    )]
    InvalidSetting {
        setting: InlineString,
        value: InlineString,
    },
}

/// Batch loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read batch file: {0}")]
    #[diagnostic(
        code(loader::io),
        help("Check that the input path exists and is readable.")
    )]
    Io(#[from] std::io::Error),

    #[error("Line {line}: expected 6 comma-separated values, found {found}")]
    #[diagnostic(
        code(loader::field_count),
        help("Each record is: id, arrival, cpu burst 1, io burst, cpu burst 2, priority.")
    )]
    FieldCount { line: usize, found: usize },

    #[error("Line {line}: field '{field}' has invalid value '{value}'")]
    #[diagnostic(
        code(loader::invalid_number),
        help("Times must be non-negative integers and priority an integer.")
    )]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: InlineString,
    },

    #[error("Expected exactly {expected} processes, found {found}")]
    #[diagnostic(
        code(loader::batch_size),
        help("Adjust the batch file or the configured batch size (SCHED_BATCH_SIZE=0 disables the check).")
    )]
    BatchSize { expected: usize, found: usize },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Load error: {0}")]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_error_serialization() {
        let err = SchedulerError::DuplicateIdentity("P1".into());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("duplicate_identity"));
        let back: SchedulerError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_error_messages() {
        let err = SchedulerError::InvalidBurst {
            id: "P4".into(),
            burst: 2,
        };
        assert_eq!(err.to_string(), "CPU burst 2 of process P4 must be positive");

        let err = LoadError::FieldCount { line: 3, found: 5 };
        assert_eq!(
            err.to_string(),
            "Line 3: expected 6 comma-separated values, found 5"
        );
    }

    #[test]
    fn test_sim_error_wraps_sources() {
        let err: SimError = SchedulerError::InvalidQuantum(0).into();
        assert!(matches!(err, SimError::Scheduler(SchedulerError::InvalidQuantum(0))));

        let err: SimError = LoadError::BatchSize {
            expected: 5,
            found: 4,
        }
        .into();
        assert!(err.to_string().contains("exactly 5 processes"));
    }
}
