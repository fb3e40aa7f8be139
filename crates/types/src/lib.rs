//! Core types for the CPU scheduling simulator.
//!
//! This crate holds the per-process simulation state shared by every other
//! crate in the workspace:
//!
//! - [`ProcessId`] and [`Quantum`] identifier/newtype wrappers
//! - [`ProcessControlBlock`], one per simulated process
//! - [`ProcessTable`], the ordered collection of control blocks that a
//!   scheduling run mutates in place

mod identifiers;
mod pcb;
mod table;

pub use identifiers::{ProcessId, Quantum};
pub use pcb::ProcessControlBlock;
pub use table::{ProcessTable, TableError};
