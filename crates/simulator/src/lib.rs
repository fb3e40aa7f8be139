//! CPU Scheduling Simulator
//!
//! The configuration, workload and reporting layer on top of
//! `cpusched-simulation`, plus the `cpusched` command-line binary.
//!
//! # Architecture
//!
//! - **Configuration**: policy and burst list for one run
//! - **Workload Generation**: deterministic random burst lists from a seed
//! - **Reporting**: the classic text report and a JSON rendering
//!
//! # Example
//!
//! ```ignore
//! use cpusched_simulator::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::round_robin(2).with_bursts(vec![5, 3, 8]);
//! let report = Simulator::new(config).run()?;
//!
//! print!("{}", report.render_text());
//! ```

pub mod config;
pub mod report;
pub mod runner;
pub mod workload;

pub use config::{SimulatorConfig, WorkloadConfig};
pub use report::{ReportError, SimulationReport};
pub use runner::Simulator;
pub use workload::BurstWorkload;
