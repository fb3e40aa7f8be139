//! First-come-first-serve scheduling.

use crate::{Scheduler, Timeline};
use cpusched_engine::run_process;
use cpusched_types::{ProcessId, ProcessTable};
use tracing::{debug, info};

/// Runs each process to completion in creation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn label(&self) -> String {
        "FCFS".to_string()
    }

    fn run_to_completion(&self, table: &mut ProcessTable, mut timeline: Option<&mut Timeline>) -> u64 {
        info!(processes = table.len(), "Starting FCFS run");

        let mut elapsed = 0;
        for index in 0..table.len() {
            let process = ProcessId(index);
            let remaining = match table.get(process) {
                Some(pcb) if !pcb.is_complete() => pcb.remaining_burst(),
                _ => continue,
            };

            let actual = run_process(table, process, remaining);
            debug!(%process, start = elapsed, duration = actual, "Dispatched");
            if let Some(timeline) = timeline.as_deref_mut() {
                timeline.record(process, actual);
            }
            elapsed += actual;
        }

        info!(elapsed, "FCFS run complete");
        elapsed
    }
}

/// Run `table` to completion under FCFS.
///
/// # Returns
///
/// Total elapsed time, which is the sum of all bursts.
pub fn run_to_completion_fcfs(table: &mut ProcessTable) -> u64 {
    FcfsScheduler.run_to_completion(table, None)
}
