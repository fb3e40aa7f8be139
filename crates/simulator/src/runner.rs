//! Simulator entry point.

use crate::{SimulationReport, SimulatorConfig};
use cpusched_simulation::{ScheduleError, SimulationRunner};
use tracing::info;

/// Runs one configured simulation and produces a report.
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Run the simulation.
    ///
    /// # Errors
    ///
    /// Any validation error from the core, plus
    /// [`ScheduleError::EmptySchedule`] when there are no processes to
    /// average over.
    pub fn run(&self) -> Result<SimulationReport, ScheduleError> {
        let stats = SimulationRunner::new(self.config.policy)
            .with_timeline(self.config.record_timeline)
            .run(&self.config.bursts)?;
        let average_wait = stats.average_wait()?;

        info!(
            policy = %self.config.policy,
            elapsed = stats.elapsed,
            average_wait,
            "Simulation finished"
        );

        Ok(SimulationReport::new(self.config.policy, stats, average_wait))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkloadConfig;
    use cpusched_simulation::Policy;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_run_fcfs() {
        let report = Simulator::new(SimulatorConfig::fcfs().with_bursts(vec![5, 3, 8]))
            .run()
            .unwrap();

        assert_eq!(report.elapsed, 16);
        assert!((report.average_wait - 13.0 / 3.0).abs() < 1e-9);
        assert!(logs_contain("Simulation finished"));
    }

    #[test]
    fn test_empty_schedule_is_an_error() {
        let result = Simulator::new(SimulatorConfig::round_robin(2)).run();
        assert_eq!(result.unwrap_err(), ScheduleError::EmptySchedule);
    }

    #[test]
    fn test_non_positive_quantum_is_an_error() {
        let config = SimulatorConfig::round_robin(-3).with_bursts(vec![1]);
        let result = Simulator::new(config).run();
        assert_eq!(result.unwrap_err(), ScheduleError::NonPositiveQuantum(-3));
    }

    #[test]
    fn test_random_workload_elapsed_matches_total_burst() {
        let workload = WorkloadConfig::default().with_num_processes(25).with_seed(99);
        for policy in [Policy::Fcfs, Policy::RoundRobin { quantum: 3 }] {
            let config = SimulatorConfig::new(policy).with_workload(&workload);
            let total: i64 = config.bursts.iter().sum();

            let report = Simulator::new(config).run().unwrap();
            assert_eq!(report.elapsed, total as u64);
        }
    }
}
