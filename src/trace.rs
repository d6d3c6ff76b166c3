//! Step-by-step simulation trace.
//!
//! When enabled, simulators append a [`SimulationStep`] for every CPU
//! ownership change (dispatch, preemption, completion) and for the start
//! of every idle gap. Each step carries the ready set as it looked at
//! that instant, which is what a step-through viewer needs to replay the
//! run without re-simulating.

use serde::{Deserialize, Serialize};

/// What happened at a trace step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    /// No process available; the CPU sits idle.
    Idle,
    /// A process received the CPU.
    Dispatch,
    /// The running process lost the CPU before finishing.
    Preempt,
    /// A process consumed its last burst tick.
    Complete,
}

/// One entry of a simulation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStep {
    /// Simulation time of the event.
    pub time: i64,
    /// Process the event concerns, if any.
    pub current_process: Option<String>,
    /// Ids of processes waiting for the CPU, in the order the policy
    /// would pick them.
    pub ready_queue: Vec<String>,
    /// Event kind.
    pub action: StepAction,
    /// Human-readable summary.
    pub description: String,
}

impl SimulationStep {
    pub(crate) fn idle(time: i64) -> Self {
        Self {
            time,
            current_process: None,
            ready_queue: Vec::new(),
            action: StepAction::Idle,
            description: format!("CPU idle at t={time}"),
        }
    }

    pub(crate) fn for_process(
        time: i64,
        action: StepAction,
        process_id: &str,
        ready_queue: Vec<String>,
    ) -> Self {
        let description = match action {
            StepAction::Dispatch => format!("{process_id} dispatched at t={time}"),
            StepAction::Preempt => format!("{process_id} preempted at t={time}"),
            StepAction::Complete => format!("{process_id} completed at t={time}"),
            StepAction::Idle => format!("CPU idle at t={time}"),
        };
        Self {
            time,
            current_process: Some(process_id.to_string()),
            ready_queue,
            action,
            description,
        }
    }
}

/// Collects trace steps when enabled; a no-op otherwise.
#[derive(Debug, Default)]
pub(crate) struct TraceRecorder {
    enabled: bool,
    steps: Vec<SimulationStep>,
}

impl TraceRecorder {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            steps: Vec::new(),
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records the step built by `make`. `make` is not called when
    /// tracing is disabled.
    pub(crate) fn record(&mut self, make: impl FnOnce() -> SimulationStep) {
        if self.enabled {
            self.steps.push(make());
        }
    }

    /// Records an idle step unless the previous step already was one.
    pub(crate) fn record_idle(&mut self, time: i64) {
        let already_idle = self
            .steps
            .last()
            .is_some_and(|s| s.action == StepAction::Idle);
        if !already_idle {
            self.record(|| SimulationStep::idle(time));
        }
    }

    pub(crate) fn into_steps(self) -> Vec<SimulationStep> {
        self.steps
    }
}
