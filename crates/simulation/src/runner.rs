//! Simulation runner.

use crate::{FcfsScheduler, RoundRobinScheduler, Scheduler, Timeline};
use cpusched_engine::{average_wait, ScheduleError};
use cpusched_types::{ProcessId, ProcessTable};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Scheduling discipline for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First-come-first-serve.
    #[default]
    Fcfs,

    /// Round-robin with the given time quantum.
    ///
    /// The quantum is validated when the run starts.
    RoundRobin {
        /// Maximum slice per dispatch.
        quantum: i64,
    },
}

impl Policy {
    /// Build the scheduler implementing this policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NonPositiveQuantum`] for a round-robin policy
    /// with `quantum <= 0`.
    pub fn scheduler(&self) -> Result<Box<dyn Scheduler>, ScheduleError> {
        match *self {
            Policy::Fcfs => Ok(Box::new(FcfsScheduler)),
            Policy::RoundRobin { quantum } => Ok(Box::new(RoundRobinScheduler::new(quantum)?)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::RoundRobin { quantum } => write!(f, "RR({})", quantum),
        }
    }
}

/// Final state of one process after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub id: ProcessId,
    pub burst: u64,
    pub wait: u64,
}

/// Results of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationStats {
    /// Label of the scheduler that produced these results.
    pub label: String,
    /// One entry per process, in creation order.
    pub processes: Vec<ProcessSummary>,
    /// Every dispatch, in order, when the run was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    /// Total simulated time until every process completed.
    pub elapsed: u64,
    #[serde(skip)]
    table: ProcessTable,
}

impl SimulationStats {
    /// Mean wait across all processes.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EmptySchedule`] when there were no processes.
    pub fn average_wait(&self) -> Result<f64, ScheduleError> {
        average_wait(&self.table)
    }

    /// Sum of every process's wait.
    pub fn total_wait(&self) -> u128 {
        self.table.total_wait()
    }

    /// The process table as it stood at the end of the run.
    pub fn table(&self) -> &ProcessTable {
        &self.table
    }
}

/// Builds a process table from a burst list and drives it to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationRunner {
    policy: Policy,
    record_timeline: bool,
}

impl SimulationRunner {
    /// Create a runner for the given policy.
    ///
    /// Runs are not recorded unless [`with_timeline`](Self::with_timeline)
    /// asks for it.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            record_timeline: false,
        }
    }

    /// Record every dispatch into a [`Timeline`].
    ///
    /// A recorded run holds one slice per dispatch, so memory grows with the
    /// number of dispatches.
    pub fn with_timeline(mut self, record: bool) -> Self {
        self.record_timeline = record;
        self
    }

    /// Run one simulation over `bursts`.
    ///
    /// The policy and the burst list are both validated before any process
    /// is dispatched. An empty burst list is a valid run with zero elapsed
    /// time; its average wait reports [`ScheduleError::EmptySchedule`].
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NonPositiveQuantum`] for an invalid quantum
    /// and [`ScheduleError::Table`] for a negative burst.
    pub fn run(&self, bursts: &[i64]) -> Result<SimulationStats, ScheduleError> {
        let scheduler = self.policy.scheduler()?;
        let mut table = ProcessTable::new(bursts)?;

        info!(policy = %self.policy, processes = table.len(), "Running simulation");

        let mut timeline = self.record_timeline.then(Timeline::new);
        let elapsed = scheduler.run_to_completion(&mut table, timeline.as_mut());
        debug!("Final process table:\n{}", table);

        let processes = table
            .iter()
            .map(|pcb| ProcessSummary {
                id: pcb.id(),
                burst: pcb.burst(),
                wait: pcb.accumulated_wait(),
            })
            .collect();

        Ok(SimulationStats {
            label: scheduler.label(),
            processes,
            timeline,
            elapsed,
            table,
        })
    }
}
