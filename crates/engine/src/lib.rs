//! Scheduling engine primitives.
//!
//! Everything a scheduling policy needs to drive a [`ProcessTable`] to
//! completion:
//!
//! - [`run_process`]: advance one process by a bounded amount of CPU time and
//!   charge the elapsed time as wait to every other pending process
//! - [`next_round_robin`]: pick the next pending process in cyclic order
//! - [`average_wait`]: mean accumulated wait once a run is over
//!
//! All functions are synchronous and deterministic. The table is owned by
//! the caller and passed in explicitly.
//!
//! [`ProcessTable`]: cpusched_types::ProcessTable

mod error;
mod execution;
mod selection;
mod stats;

pub use error::ScheduleError;
pub use execution::run_process;
pub use selection::next_round_robin;
pub use stats::average_wait;
