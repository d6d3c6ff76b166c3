//! CPU scheduling simulators and KPI evaluation.
//!
//! # Algorithms
//!
//! | Policy | Simulator | Granularity |
//! |--------|-----------|-------------|
//! | FCFS | `fcfs` | whole bursts |
//! | SJF, Priority | `selection` (run to completion) | whole bursts |
//! | SRTF, preemptive Priority | `selection` (unit step) | 1 tick |
//! | Round Robin | `round_robin` | quantum slices |
//!
//! All simulators share one per-run state arena and the same
//! completion bookkeeping; [`AverageMetrics`] folds the completed records
//! into the averages reported on every result.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod metrics;
mod round_robin;
mod selection;
mod simulator;
mod state;

pub use kpi::ScheduleKpi;
pub use metrics::AverageMetrics;
pub use simulator::{run, Simulation, SimulationRequest, Simulator, DEFAULT_TIME_QUANTUM};
