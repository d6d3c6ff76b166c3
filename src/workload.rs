//! Process batch generators.
//!
//! - [`sample_batch`]: the fixed four-process demo batch.
//! - [`WorkloadConfig`]: random batches for experiments and sweeps.
//!
//! Generated batches pass validation for every policy: there is at least
//! one process, ids are unique, arrivals are non-negative, bursts are
//! positive and every process carries a priority when a priority range is
//! configured. Ranges near `i64::MAX` can still overflow the timeline and
//! are rejected with `TimeOverflow`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;

/// The classic four-process demo batch with priorities.
///
/// | id | arrival | burst | priority |
/// |----|---------|-------|----------|
/// | P1 | 0 | 8 | 3 |
/// | P2 | 1 | 4 | 1 |
/// | P3 | 2 | 9 | 4 |
/// | P4 | 3 | 5 | 2 |
pub fn sample_batch() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 8).with_priority(3),
        ProcessSpec::new("P2", 1, 4).with_priority(1),
        ProcessSpec::new("P3", 2, 9).with_priority(4),
        ProcessSpec::new("P4", 3, 5).with_priority(2),
    ]
}

/// Random batch parameters. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadConfig {
    /// Number of processes (at least one is always generated).
    pub count: usize,
    /// Arrival time range (clamped to `>= 0`).
    pub arrival_range: (i64, i64),
    /// Burst time range (clamped to `>= 1`).
    pub burst_range: (i64, i64),
    /// Priority range; `None` leaves priorities unset.
    pub priority_range: Option<(i32, i32)>,
    /// Id prefix; ids are `{prefix}1..={prefix}{count}`.
    pub id_prefix: String,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            arrival_range: (0, 10),
            burst_range: (1, 10),
            priority_range: Some((1, 5)),
            id_prefix: "P".to_string(),
        }
    }
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrivals(mut self, min: i64, max: i64) -> Self {
        self.arrival_range = (min, max);
        self
    }

    /// Sets the burst time range.
    pub fn with_bursts(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the priority range.
    pub fn with_priorities(mut self, min: i32, max: i32) -> Self {
        self.priority_range = Some((min, max));
        self
    }

    /// Generates processes without priorities.
    pub fn without_priorities(mut self) -> Self {
        self.priority_range = None;
        self
    }

    /// Sets the id prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Draws a batch from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let (arrival_lo, arrival_hi) = ordered(self.arrival_range, 0);
        let (burst_lo, burst_hi) = ordered(self.burst_range, 1);

        (1..=self.count.max(1))
            .map(|n| {
                let spec = ProcessSpec::new(
                    format!("{}{n}", self.id_prefix),
                    rng.random_range(arrival_lo..=arrival_hi),
                    rng.random_range(burst_lo..=burst_hi),
                );
                match self.priority_range {
                    Some((a, b)) => spec.with_priority(rng.random_range(a.min(b)..=a.max(b))),
                    None => spec,
                }
            })
            .collect()
    }
}

/// Sorts a range's bounds and clamps both to `floor`.
fn ordered((a, b): (i64, i64), floor: i64) -> (i64, i64) {
    (a.min(b).max(floor), a.max(b).max(floor))
}
