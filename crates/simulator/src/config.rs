//! Configuration types for the simulator.

use cpusched_simulation::Policy;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Scheduling discipline.
    pub policy: Policy,

    /// Burst length of each process, in creation order.
    ///
    /// Kept signed so that negative input reaches the core and is rejected
    /// there with a proper error.
    pub bursts: Vec<i64>,

    /// Keep a per-dispatch timeline for the report.
    pub record_timeline: bool,
}

impl SimulatorConfig {
    /// Create a new simulator configuration with no processes.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            bursts: Vec::new(),
            record_timeline: false,
        }
    }

    /// First-come-first-serve configuration.
    pub fn fcfs() -> Self {
        Self::new(Policy::Fcfs)
    }

    /// Round-robin configuration with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::new(Policy::RoundRobin { quantum })
    }

    /// Set the burst list.
    pub fn with_bursts(mut self, bursts: Vec<i64>) -> Self {
        self.bursts = bursts;
        self
    }

    /// Record the dispatch timeline.
    pub fn with_timeline(mut self, record: bool) -> Self {
        self.record_timeline = record;
        self
    }

    /// Replace the burst list with one generated from a workload.
    pub fn with_workload(self, workload: &WorkloadConfig) -> Self {
        let bursts = crate::BurstWorkload::new(workload.clone()).generate();
        self.with_bursts(bursts)
    }

    /// Number of processes in the run.
    pub fn num_processes(&self) -> usize {
        self.bursts.len()
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::fcfs()
    }
}

/// Random workload configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of processes to generate.
    pub num_processes: usize,

    /// Smallest burst length (inclusive).
    pub min_burst: u32,

    /// Largest burst length (inclusive).
    pub max_burst: u32,

    /// Random seed for deterministic generation.
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            num_processes: 8,
            min_burst: 1,
            max_burst: 20,
            seed: 12345,
        }
    }
}

impl WorkloadConfig {
    /// Set the number of processes.
    pub fn with_num_processes(mut self, num_processes: usize) -> Self {
        self.num_processes = num_processes;
        self
    }

    /// Set the inclusive burst range.
    ///
    /// The bounds are swapped if given in the wrong order.
    pub fn with_burst_range(mut self, min: u32, max: u32) -> Self {
        self.min_burst = min.min(max);
        self.max_burst = min.max(max);
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
