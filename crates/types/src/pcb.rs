//! Process control block.

use crate::ProcessId;
use serde::Serialize;

/// Simulation state for a single process.
///
/// `remaining_burst` only ever decreases and `accumulated_wait` only ever
/// increases while the process still has work. Once `remaining_burst` hits
/// zero the block is frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessControlBlock {
    /// Position in the input order.
    id: ProcessId,

    /// Total CPU time requested at creation.
    burst: u64,

    /// CPU time still needed before completion.
    remaining_burst: u64,

    /// Time spent ready but not running.
    accumulated_wait: u64,
}

impl ProcessControlBlock {
    /// Create a fresh control block with no wait charged.
    pub fn new(id: ProcessId, burst: u64) -> Self {
        Self {
            id,
            burst,
            remaining_burst: burst,
            accumulated_wait: 0,
        }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    /// Total CPU time requested at creation.
    pub fn burst(&self) -> u64 {
        self.burst
    }

    pub fn remaining_burst(&self) -> u64 {
        self.remaining_burst
    }

    pub fn accumulated_wait(&self) -> u64 {
        self.accumulated_wait
    }

    /// A process is complete once it has no remaining burst.
    pub fn is_complete(&self) -> bool {
        self.remaining_burst == 0
    }

    /// Consume up to `amount` units of CPU time.
    ///
    /// Returns the amount actually consumed, which never exceeds the
    /// remaining burst.
    pub fn consume(&mut self, amount: u64) -> u64 {
        let actual = amount.min(self.remaining_burst);
        self.remaining_burst -= actual;
        actual
    }

    /// Charge `amount` units of wait time.
    ///
    /// Ignored once the process is complete.
    pub fn charge_wait(&mut self, amount: u64) {
        if !self.is_complete() {
            self.accumulated_wait += amount;
        }
    }
}
