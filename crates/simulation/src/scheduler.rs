//! Scheduler trait shared by every dispatch discipline.

use crate::Timeline;
use cpusched_types::ProcessTable;

/// A discipline that drives a process table to completion.
///
/// Implementations are:
///
/// - **Synchronous**: a run never blocks and has no suspension points
/// - **Deterministic**: the same table always produces the same dispatches
/// - **Exclusive**: the table is borrowed mutably for the whole run
///
/// Every dispatch goes through [`cpusched_engine::run_process`], so wait-time
/// accounting is identical across disciplines.
pub trait Scheduler {
    /// Human-readable label, e.g. `FCFS` or `RR(2)`.
    fn label(&self) -> String;

    /// Run every process in `table` to completion.
    ///
    /// Each dispatch is appended to `timeline` when one is given. Without a
    /// timeline the run keeps no per-dispatch state.
    ///
    /// # Returns
    ///
    /// Total elapsed time, which equals the sum of the table's remaining
    /// bursts at the start of the run.
    fn run_to_completion(&self, table: &mut ProcessTable, timeline: Option<&mut Timeline>) -> u64;
}
