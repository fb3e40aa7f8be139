//! Error types for scheduling.

use cpusched_types::TableError;
use thiserror::Error;

/// Errors surfaced to callers of a scheduling run.
///
/// Addressing an invalid or completed process is not an error here: the
/// execution primitive absorbs it as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The burst list could not be turned into a process table.
    #[error("Invalid burst list: {0}")]
    Table(#[from] TableError),

    /// Round-robin was configured with a zero or negative quantum.
    #[error("Time quantum must be a positive integer, got {0}")]
    NonPositiveQuantum(i64),

    /// There are no processes, so the average wait is undefined.
    #[error("No processes to schedule")]
    EmptySchedule,
}
