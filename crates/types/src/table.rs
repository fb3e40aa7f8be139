//! Process table.

use crate::{ProcessControlBlock, ProcessId};
use serde::Serialize;
use std::fmt;

/// Ordered collection of process control blocks.
///
/// Creation order is both the FCFS dispatch order and the round-robin cycle
/// order. A table is built once per scheduling run, mutated in place by the
/// execution primitive, and read back for statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProcessTable {
    processes: Vec<ProcessControlBlock>,
}

impl ProcessTable {
    /// Build a table from a list of burst lengths.
    ///
    /// Process `i` gets `id = i` and `remaining_burst = bursts[i]`. An empty
    /// list yields an empty table.
    ///
    /// The sum of all bursts must fit in a `u64`. Every simulated time and
    /// every individual wait is bounded by that sum.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NegativeBurst`] for the first negative burst and
    /// [`TableError::BurstOverflow`] for the first burst that pushes the total
    /// past `u64::MAX`.
    pub fn new(bursts: &[i64]) -> Result<Self, TableError> {
        let mut processes = Vec::with_capacity(bursts.len());
        let mut total: u64 = 0;

        for (i, &burst) in bursts.iter().enumerate() {
            let id = ProcessId(i);
            let burst = u64::try_from(burst)
                .map_err(|_| TableError::NegativeBurst { process: id, burst })?;
            total = total
                .checked_add(burst)
                .ok_or(TableError::BurstOverflow { process: id })?;
            processes.push(ProcessControlBlock::new(id, burst));
        }

        Ok(Self { processes })
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Check if the table has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn get(&self, id: ProcessId) -> Option<&ProcessControlBlock> {
        self.processes.get(id.index())
    }

    pub fn get_mut(&mut self, id: ProcessId) -> Option<&mut ProcessControlBlock> {
        self.processes.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessControlBlock> {
        self.processes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProcessControlBlock> {
        self.processes.iter_mut()
    }

    /// Sum of every process's requested burst.
    pub fn total_burst(&self) -> u64 {
        self.processes.iter().map(|p| p.burst()).sum()
    }

    /// Sum of every process's accumulated wait.
    ///
    /// Each wait fits in a `u64`, but their sum may not.
    pub fn total_wait(&self) -> u128 {
        self.processes
            .iter()
            .map(|p| u128::from(p.accumulated_wait()))
            .sum()
    }

    /// Number of processes that still have work.
    pub fn incomplete_count(&self) -> usize {
        self.processes.iter().filter(|p| !p.is_complete()).count()
    }

    /// Check if every process has finished.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(|p| p.is_complete())
    }
}

impl fmt::Display for ProcessTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pcb in &self.processes {
            writeln!(
                f,
                "{}: burst={} remaining={} wait={}",
                pcb.id(),
                pcb.burst(),
                pcb.remaining_burst(),
                pcb.accumulated_wait()
            )?;
        }
        Ok(())
    }
}

/// Errors that can occur when building a process table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A burst length was negative.
    #[error("{process} has negative burst length {burst}")]
    NegativeBurst {
        /// The offending process.
        process: ProcessId,
        /// The rejected burst length.
        burst: i64,
    },

    /// The running total of burst lengths no longer fits in a `u64`.
    #[error("total burst length overflows at {process}")]
    BurstOverflow {
        /// The process whose burst overflowed the total.
        process: ProcessId,
    },
}
