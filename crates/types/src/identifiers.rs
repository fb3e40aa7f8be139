//! Domain-specific identifier types.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroU64;

/// Process identifier.
///
/// Assigned at table construction as the process's position in the input
/// order, so it doubles as the index into the [`ProcessTable`](crate::ProcessTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProcessId(pub usize);

impl ProcessId {
    /// Get the raw index.
    pub fn index(self) -> usize {
        self.0
    }

    /// The next process in cycle order for a table of `len` processes.
    ///
    /// Returns None for an empty table.
    pub fn next_in_cycle(self, len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(ProcessId((self.0 + 1) % len))
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Round-robin time quantum.
///
/// Always positive: a zero or negative slice would make no progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantum(NonZeroU64);

impl Quantum {
    /// Create from a signed value (returns None if not positive).
    pub fn new(quantum: i64) -> Option<Self> {
        u64::try_from(quantum)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Quantum)
    }

    /// Get the raw value.
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
