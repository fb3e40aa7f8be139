//! Deterministic scheduling runs.
//!
//! This crate drives a [`ProcessTable`](cpusched_types::ProcessTable) to
//! completion under one of two disciplines. Given the same burst list and
//! policy, it produces identical results every run.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  SimulationRunner                       │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     ProcessTable::new(bursts)                      │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Scheduler (FcfsScheduler | RoundRobinScheduler)│ │
//! │  │     next process → run_process → record Slice      │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     SimulationStats (waits, timeline, average)     │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```

mod fcfs;
mod round_robin;
mod runner;
mod scheduler;
mod timeline;

pub use cpusched_engine::ScheduleError;
pub use fcfs::{run_to_completion_fcfs, FcfsScheduler};
pub use round_robin::{run_to_completion_rr, RoundRobinScheduler};
pub use runner::{Policy, ProcessSummary, SimulationRunner, SimulationStats};
pub use scheduler::Scheduler;
pub use timeline::{Slice, Timeline};
