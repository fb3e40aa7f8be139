//! Dispatch timeline.

use cpusched_types::ProcessId;
use serde::Serialize;
use std::fmt;

/// One dispatch: a process holding the CPU for a contiguous stretch of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    /// The process that ran.
    pub process: ProcessId,
    /// Simulated time at which the slice started.
    pub start: u64,
    /// Time units actually consumed.
    pub duration: u64,
}

impl Slice {
    /// Simulated time at which the slice ended.
    pub fn end(&self) -> u64 {
        self.start + self.duration
    }
}

/// Ordered log of every dispatch in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dispatch starting where the previous one ended.
    pub fn record(&mut self, process: ProcessId, duration: u64) {
        let start = self.elapsed();
        self.slices.push(Slice {
            process,
            start,
            duration,
        });
    }

    /// Total simulated time covered by the timeline.
    pub fn elapsed(&self) -> u64 {
        self.slices.last().map(Slice::end).unwrap_or(0)
    }

    /// Processes in dispatch order.
    pub fn order(&self) -> Vec<ProcessId> {
        self.slices.iter().map(|s| s.process).collect()
    }

    /// Time at which `process` finished its last slice.
    pub fn completion_time(&self, process: ProcessId) -> Option<u64> {
        self.slices
            .iter()
            .rev()
            .find(|s| s.process == process)
            .map(Slice::end)
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Number of dispatches.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Check if nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slice in &self.slices {
            writeln!(f, "  [{}, {}) {}", slice.start, slice.end(), slice.process)?;
        }
        Ok(())
    }
}
