//! Round-robin scheduling.

use crate::{Scheduler, Timeline};
use cpusched_engine::{next_round_robin, run_process, ScheduleError};
use cpusched_types::{ProcessTable, Quantum};
use tracing::{debug, info};

/// Time-slices processes in creation order, revisiting until all complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: Quantum,
}

impl RoundRobinScheduler {
    /// Create a scheduler with the given quantum.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NonPositiveQuantum`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ScheduleError> {
        Quantum::new(quantum)
            .map(Self::with_quantum)
            .ok_or(ScheduleError::NonPositiveQuantum(quantum))
    }

    /// Create a scheduler from an already validated quantum.
    pub fn with_quantum(quantum: Quantum) -> Self {
        Self { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn label(&self) -> String {
        format!("RR({})", self.quantum)
    }

    fn run_to_completion(&self, table: &mut ProcessTable, mut timeline: Option<&mut Timeline>) -> u64 {
        info!(
            processes = table.len(),
            quantum = self.quantum.get(),
            "Starting round-robin run"
        );

        let mut elapsed = 0;
        let mut dispatches = 0u64;
        let mut prev = None;
        while let Some(process) = next_round_robin(prev, table) {
            let actual = run_process(table, process, self.quantum.get());
            debug!(%process, start = elapsed, duration = actual, "Dispatched");
            if let Some(timeline) = timeline.as_deref_mut() {
                timeline.record(process, actual);
            }
            elapsed += actual;
            dispatches += 1;
            prev = Some(process);
        }

        info!(elapsed, dispatches, "Round-robin run complete");
        elapsed
    }
}

/// Run `table` to completion under round-robin with the given quantum.
///
/// The quantum is validated before the table is touched.
///
/// # Errors
///
/// Returns [`ScheduleError::NonPositiveQuantum`] if `quantum <= 0`.
pub fn run_to_completion_rr(table: &mut ProcessTable, quantum: i64) -> Result<u64, ScheduleError> {
    let scheduler = RoundRobinScheduler::new(quantum)?;
    Ok(scheduler.run_to_completion(table, None))
}
