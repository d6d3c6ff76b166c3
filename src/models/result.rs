//! Simulation output model.

use serde::{Deserialize, Serialize};

use super::{Algorithm, ExecutionInterval, ProcessRecord};

/// Outcome of one simulation run.
///
/// Built once at the end of a run and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingResult {
    /// Policy that produced this result.
    pub algorithm: Algorithm,
    /// Completed processes in completion order.
    pub processes: Vec<ProcessRecord>,
    /// Gantt segments in execution order.
    pub intervals: Vec<ExecutionInterval>,
    /// Time cursor at loop termination (latest completion time).
    pub total_time: i64,
    /// Mean of `waiting_time` over all processes.
    pub average_waiting_time: f64,
    /// Mean of `turnaround_time` over all processes.
    pub average_turnaround_time: f64,
    /// Mean of `response_time` over all processes.
    pub average_response_time: f64,
}

impl SchedulingResult {
    /// Finds the record for a process.
    pub fn record(&self, process_id: &str) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.id() == process_id)
    }

    /// Gantt segments owned by a process, in execution order.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Total ticks a process spent on the CPU.
    pub fn executed_time(&self, process_id: &str) -> i64 {
        self.intervals_for(process_id)
            .iter()
            .map(|i| i.duration())
            .sum()
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.processes.iter().map(|p| p.id()).collect()
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
