//! Aggregate statistics over a finished run.

use crate::ScheduleError;
use cpusched_types::ProcessTable;

/// Mean accumulated wait across all processes.
///
/// # Errors
///
/// Returns [`ScheduleError::EmptySchedule`] for an empty table, where the
/// average is undefined.
pub fn average_wait(table: &ProcessTable) -> Result<f64, ScheduleError> {
    if table.is_empty() {
        return Err(ScheduleError::EmptySchedule);
    }
    Ok(table.total_wait() as f64 / table.len() as f64)
}
