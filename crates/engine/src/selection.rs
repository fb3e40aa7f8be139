//! Round-robin selection.

use cpusched_types::{ProcessId, ProcessTable};

/// Pick the next process to dispatch in round-robin order.
///
/// The scan starts right after `prev` (or at the first process when nothing
/// has been dispatched yet), wraps around, and covers each position at most
/// once. The first process with remaining work wins.
///
/// Returns None when the table is empty or every process is complete.
pub fn next_round_robin(prev: Option<ProcessId>, table: &ProcessTable) -> Option<ProcessId> {
    let len = table.len();
    let start = match prev {
        Some(prev) => prev.next_in_cycle(len)?,
        None => ProcessId(0),
    };

    (0..len)
        .map(|offset| ProcessId((start.index() + offset) % len))
        .find(|&id| table.get(id).is_some_and(|pcb| !pcb.is_complete()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_process;

    #[test]
    fn test_start_of_simulation_picks_first_pending() {
        let table = ProcessTable::new(&[5, 3, 8]).unwrap();
        assert_eq!(next_round_robin(None, &table), Some(ProcessId(0)));

        let table = ProcessTable::new(&[0, 0, 8]).unwrap();
        assert_eq!(next_round_robin(None, &table), Some(ProcessId(2)));
    }

    #[test]
    fn test_advances_past_previous() {
        let table = ProcessTable::new(&[5, 3, 8]).unwrap();
        assert_eq!(
            next_round_robin(Some(ProcessId(0)), &table),
            Some(ProcessId(1))
        );
        assert_eq!(
            next_round_robin(Some(ProcessId(2)), &table),
            Some(ProcessId(0))
        );
    }

    #[test]
    fn test_skips_completed_processes() {
        let mut table = ProcessTable::new(&[5, 3, 8]).unwrap();
        run_process(&mut table, ProcessId(1), 3);

        assert_eq!(
            next_round_robin(Some(ProcessId(0)), &table),
            Some(ProcessId(2))
        );
    }

    #[test]
    fn test_returns_previous_when_only_one_left() {
        let mut table = ProcessTable::new(&[5, 3]).unwrap();
        run_process(&mut table, ProcessId(1), 3);

        assert_eq!(
            next_round_robin(Some(ProcessId(0)), &table),
            Some(ProcessId(0))
        );
    }

    #[test]
    fn test_none_remain() {
        let table = ProcessTable::new(&[0, 0]).unwrap();
        assert_eq!(next_round_robin(None, &table), None);
        assert_eq!(next_round_robin(Some(ProcessId(1)), &table), None);
    }

    #[test]
    fn test_empty_table() {
        let table = ProcessTable::new(&[]).unwrap();
        assert_eq!(next_round_robin(None, &table), None);
        assert_eq!(next_round_robin(Some(ProcessId(3)), &table), None);
    }

    #[test]
    fn test_out_of_range_previous_wraps() {
        let table = ProcessTable::new(&[1, 1, 1]).unwrap();
        assert_eq!(
            next_round_robin(Some(ProcessId(4)), &table),
            Some(ProcessId(2))
        );
    }
}
