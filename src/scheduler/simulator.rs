//! Simulation entry points and run configuration.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::selection::PreemptionMode;
use super::state::SimState;
use super::{fcfs, round_robin, selection};
use crate::dispatching::RuleEngine;
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Algorithm, ProcessSpec, SchedulingResult};
use crate::trace::SimulationStep;
use crate::validation::validate_processes;

/// Time quantum offered to Round Robin callers that have no preference.
///
/// The engine never applies it implicitly: Round Robin without a quantum
/// is rejected.
pub const DEFAULT_TIME_QUANTUM: i64 = 2;

/// Serializable description of one simulation run.
///
/// The algorithm is kept as its wire tag so an unknown tag surfaces as a
/// configuration error rather than a deserialization failure.
///
/// # Example
/// ```
/// use cpu_schedule::scheduler::SimulationRequest;
/// use cpu_schedule::models::{Algorithm, ProcessSpec};
///
/// let request = SimulationRequest::new(Algorithm::RoundRobin, vec![ProcessSpec::new("P1", 0, 3)])
///     .with_time_quantum(2);
/// let outcome = request.run().unwrap();
/// assert_eq!(outcome.result.intervals.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Algorithm wire tag, e.g. `"SJF_PREEMPTIVE"`.
    pub algorithm: String,
    /// Processes in input order.
    pub processes: Vec<ProcessSpec>,
    /// Round Robin time slice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<i64>,
    /// Whether to record a step-by-step trace.
    #[serde(default)]
    pub record_trace: bool,
}

impl SimulationRequest {
    /// Creates a request for `algorithm` over `processes`.
    pub fn new(algorithm: Algorithm, processes: Vec<ProcessSpec>) -> Self {
        Self {
            algorithm: algorithm.as_str().to_string(),
            processes,
            time_quantum: None,
            record_trace: false,
        }
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }

    /// Enables trace recording.
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Builds the simulator this request describes.
    pub fn simulator(&self) -> SimulationResult<Simulator> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let mut simulator = Simulator::new(algorithm).with_trace(self.record_trace);
        simulator.time_quantum = self.time_quantum;
        Ok(simulator)
    }

    /// Runs the request.
    pub fn run(&self) -> SimulationResult<Simulation> {
        self.simulator()?.simulate(&self.processes)
    }
}

/// A finished simulation: the result plus the trace, if one was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub result: SchedulingResult,
    /// Empty unless tracing was enabled.
    pub trace: Vec<SimulationStep>,
}

/// Configured CPU scheduling simulator.
///
/// Pure and deterministic: the same processes always produce the same
/// result, and the caller's specs are never modified.
///
/// # Example
///
/// ```
/// use cpu_schedule::scheduler::Simulator;
/// use cpu_schedule::models::{Algorithm, ProcessSpec};
///
/// let processes = vec![
///     ProcessSpec::new("P1", 0, 8),
///     ProcessSpec::new("P2", 1, 4),
/// ];
/// let result = Simulator::new(Algorithm::SjfPreemptive).run(&processes).unwrap();
/// assert_eq!(result.completion_order(), vec!["P2", "P1"]);
/// assert_eq!(result.total_time, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    algorithm: Algorithm,
    time_quantum: Option<i64>,
    record_trace: bool,
    iteration_limit: Option<u64>,
}

impl Simulator {
    /// Creates a simulator for `algorithm` with tracing off.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            time_quantum: None,
            record_trace: false,
            iteration_limit: None,
        }
    }

    /// Sets the Round Robin time quantum. Ignored by other policies.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }

    /// Enables or disables trace recording.
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Overrides the loop iteration cap.
    ///
    /// By default the cap is derived from the batch and is never reached
    /// by a correct run.
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn time_quantum(&self) -> Option<i64> {
        self.time_quantum
    }

    /// Validates `processes`, then simulates them.
    pub fn simulate(&self, processes: &[ProcessSpec]) -> SimulationResult<Simulation> {
        if let Err(errors) = validate_processes(self.algorithm, processes, self.time_quantum) {
            warn!(
                "rejected {} run: {} validation error(s)",
                self.algorithm,
                errors.len()
            );
            return Err(SimulationError::InvalidConfiguration(errors));
        }

        debug!(
            "simulating {} over {} process(es)",
            self.algorithm,
            processes.len()
        );

        let mut state = SimState::new(
            self.algorithm,
            processes,
            self.record_trace,
            self.iteration_limit,
        );

        match self.algorithm {
            Algorithm::RoundRobin => {
                let quantum = self
                    .time_quantum
                    .ok_or_else(|| state.invariant("round robin started without a quantum"))?;
                round_robin::simulate(&mut state, quantum)?;
            }
            algorithm => {
                let engine = RuleEngine::for_algorithm(algorithm)
                    .ok_or_else(|| state.invariant("no selection rules for policy"))?;
                if algorithm == Algorithm::Fcfs {
                    fcfs::simulate(&mut state, &engine)?;
                } else {
                    selection::simulate(
                        &mut state,
                        &engine,
                        PreemptionMode::for_algorithm(algorithm),
                    )?;
                }
            }
        }

        let (result, trace) = state.into_outcome()?;
        debug!(
            "{} finished at t={} ({} segment(s))",
            self.algorithm,
            result.total_time,
            result.intervals.len()
        );
        Ok(Simulation { result, trace })
    }

    /// Simulates and returns only the result.
    pub fn run(&self, processes: &[ProcessSpec]) -> SimulationResult<SchedulingResult> {
        self.simulate(processes).map(|s| s.result)
    }
}

/// Runs `algorithm` over `processes`.
///
/// `time_quantum` is required for Round Robin and ignored otherwise.
pub fn run(
    algorithm: Algorithm,
    processes: &[ProcessSpec],
    time_quantum: Option<i64>,
) -> SimulationResult<SchedulingResult> {
    let mut simulator = Simulator::new(algorithm);
    simulator.time_quantum = time_quantum;
    simulator.run(processes)
}
