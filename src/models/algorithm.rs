//! Scheduling policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{ValidationError, ValidationErrorKind};

/// The six supported CPU scheduling policies.
///
/// Wire names (serde, `FromStr`, `Display`) are the upper snake case tags
/// `FCFS`, `SJF_NON_PREEMPTIVE`, ..., `ROUND_ROBIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First, run to completion.
    SjfNonPreemptive,
    /// Shortest Remaining Time First.
    SjfPreemptive,
    /// Highest priority first, run to completion.
    PriorityNonPreemptive,
    /// Highest priority first, preempting at tick boundaries.
    PriorityPreemptive,
    /// FIFO ready queue with a fixed time quantum.
    RoundRobin,
}

impl Algorithm {
    /// All policies, in declaration order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::SjfNonPreemptive,
        Algorithm::SjfPreemptive,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::SjfNonPreemptive => "SJF_NON_PREEMPTIVE",
            Algorithm::SjfPreemptive => "SJF_PREEMPTIVE",
            Algorithm::PriorityNonPreemptive => "PRIORITY_NON_PREEMPTIVE",
            Algorithm::PriorityPreemptive => "PRIORITY_PREEMPTIVE",
            Algorithm::RoundRobin => "ROUND_ROBIN",
        }
    }

    /// Human-readable name.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come, First-Served",
            Algorithm::SjfNonPreemptive => "Shortest Job First (non-preemptive)",
            Algorithm::SjfPreemptive => "Shortest Remaining Time First",
            Algorithm::PriorityNonPreemptive => "Priority (non-preemptive)",
            Algorithm::PriorityPreemptive => "Priority (preemptive)",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::SjfPreemptive | Algorithm::PriorityPreemptive | Algorithm::RoundRobin
        )
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(
            self,
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive
        )
    }

    /// Whether a time quantum must be configured.
    pub fn requires_time_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownAlgorithm,
                    format!("Unknown algorithm: {s}"),
                )
            })
    }
}
