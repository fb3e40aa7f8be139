//! The execution primitive.

use cpusched_types::{ProcessId, ProcessTable};
use tracing::trace;

/// Run `process` for at most `amount` time units.
///
/// The process consumes `min(amount, remaining_burst)` units and every other
/// process that still has work is charged the same amount as wait time.
/// Completed processes and the running process itself are never charged.
///
/// Out-of-range or already complete processes are ignored: the table is left
/// untouched and 0 is returned.
///
/// # Returns
///
/// The CPU time actually consumed.
pub fn run_process(table: &mut ProcessTable, process: ProcessId, amount: u64) -> u64 {
    let (actual, remaining) = match table.get_mut(process) {
        Some(pcb) if !pcb.is_complete() => {
            let actual = pcb.consume(amount);
            (actual, pcb.remaining_burst())
        }
        Some(_) => {
            trace!(%process, "Ignoring dispatch of completed process");
            return 0;
        }
        None => {
            trace!(%process, "Ignoring dispatch of unknown process");
            return 0;
        }
    };

    for pcb in table.iter_mut().filter(|pcb| pcb.id() != process) {
        pcb.charge_wait(actual);
    }

    trace!(
        %process,
        requested = amount,
        actual,
        remaining,
        "Ran process"
    );

    actual
}
