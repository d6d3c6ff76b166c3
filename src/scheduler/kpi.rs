//! Schedule quality metrics (KPIs).
//!
//! Computes CPU-level performance indicators from a finished simulation,
//! on top of the three per-process averages every result carries.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Time cursor at the end of the run |
//! | Busy Time | Sum of Gantt segment lengths |
//! | Idle Time | Makespan minus busy time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Completed processes per tick |
//! | Context Switches | Consecutive segments owned by different processes |
//! | Min Waiting Time | Smallest single waiting time |
//! | Max Waiting Time | Largest single waiting time |
//! | Max Response Time | Largest single response time |

use serde::{Deserialize, Serialize};

use crate::models::SchedulingResult;

/// CPU schedule performance indicators. All times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKpi {
    /// End of the run.
    pub makespan: i64,
    /// Ticks with a process on the CPU.
    pub busy_time: i64,
    /// Ticks with the CPU idle.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of ownership changes between consecutive segments.
    pub context_switches: usize,
    /// Smallest waiting time of any process.
    pub min_waiting_time: i64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// Largest response time of any process.
    pub max_response_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SchedulingResult) -> Self {
        let makespan = result.total_time;
        let busy_time: i64 = result.intervals.iter().map(|i| i.duration()).sum();

        let context_switches = result
            .intervals
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count();

        let waits = || result.processes.iter().filter_map(|p| p.waiting_time());
        let min_waiting_time = waits().min().unwrap_or(0);
        let max_waiting_time = waits().max().unwrap_or(0);
        let max_response_time = result
            .processes
            .iter()
            .filter_map(|p| p.response_time())
            .max()
            .unwrap_or(0);

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                result.processes.len() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            context_switches,
            min_waiting_time,
            max_waiting_time,
            max_response_time,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: i64, min_utilization: f64) -> bool {
        self.max_waiting_time <= max_waiting && self.cpu_utilization >= min_utilization
    }
}
