//! Simulation report rendering.

use cpusched_simulation::{Policy, ProcessSummary, SimulationStats, Timeline};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a simulation, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Policy the run was configured with.
    pub policy: Policy,
    /// Per-process burst and final wait, in creation order.
    pub processes: Vec<ProcessSummary>,
    /// Total simulated time.
    pub elapsed: u64,
    /// Mean wait across all processes.
    pub average_wait: f64,
    /// Every dispatch, in order, when the run was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
}

impl SimulationReport {
    pub fn new(policy: Policy, stats: SimulationStats, average_wait: f64) -> Self {
        Self {
            policy,
            processes: stats.processes,
            elapsed: stats.elapsed,
            average_wait,
            timeline: stats.timeline,
        }
    }

    /// Header line naming the policy.
    pub fn header(&self) -> String {
        match self.policy {
            Policy::Fcfs => "Using FCFS".to_string(),
            Policy::RoundRobin { quantum } => format!("Using RR({}).", quantum),
        }
    }

    /// The classic text report: header, one acceptance line per process and
    /// the average wait with two decimals.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    /// One line per dispatch: `[start, end) process`.
    ///
    /// `None` when the run was not recorded.
    pub fn render_timeline(&self) -> Option<String> {
        self.timeline
            .as_ref()
            .map(|timeline| format!("Timeline:\n{}", timeline))
    }

    /// Pretty-printed JSON rendering of the whole report.
    pub fn render_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f)?;
        for process in &self.processes {
            writeln!(f, "Accepted {}: Burst {}", process.id, process.burst)?;
        }
        writeln!(f, "Average wait time: {:.2}", self.average_wait)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Simulator, SimulatorConfig};

    fn report(config: SimulatorConfig) -> SimulationReport {
        Simulator::new(config).run().unwrap()
    }

    #[test]
    fn test_fcfs_text() {
        let report = report(SimulatorConfig::fcfs().with_bursts(vec![5, 3, 8]));
        assert_eq!(
            report.render_text(),
            "Using FCFS\n\
             \n\
             Accepted P0: Burst 5\n\
             Accepted P1: Burst 3\n\
             Accepted P2: Burst 8\n\
             Average wait time: 4.33\n"
        );
    }

    #[test]
    fn test_round_robin_text() {
        let report = report(SimulatorConfig::round_robin(2).with_bursts(vec![5, 3, 8]));
        assert_eq!(
            report.render_text(),
            "Using RR(2).\n\
             \n\
             Accepted P0: Burst 5\n\
             Accepted P1: Burst 3\n\
             Accepted P2: Burst 8\n\
             Average wait time: 7.00\n"
        );
    }

    #[test]
    fn test_timeline_text() {
        let config = SimulatorConfig::round_robin(3).with_bursts(vec![4, 2]);
        let report = report(config.with_timeline(true));
        assert_eq!(
            report.render_timeline().unwrap(),
            "Timeline:\n  [0, 3) P0\n  [3, 5) P1\n  [5, 6) P0\n"
        );
    }

    #[test]
    fn test_unrecorded_run_has_no_timeline() {
        let report = report(SimulatorConfig::round_robin(3).with_bursts(vec![4, 2]));
        assert_eq!(report.render_timeline(), None);

        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert!(value.get("timeline").is_none());
    }

    #[test]
    fn test_json() {
        let config = SimulatorConfig::round_robin(2).with_bursts(vec![1, 1]);
        let report = report(config.with_timeline(true));
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

        assert_eq!(value["policy"]["kind"], "round_robin");
        assert_eq!(value["policy"]["quantum"], 2);
        assert_eq!(value["elapsed"], 2);
        assert_eq!(value["average_wait"], 0.5);
        assert_eq!(value["processes"][1]["id"], 1);
        assert_eq!(value["processes"][1]["wait"], 1);
        assert_eq!(value["timeline"][1]["start"], 1);
    }
}
