//! Deterministic CPU scheduling simulator.
//!
//! Given a batch of processes (arrival time, burst time, optional
//! priority) and a scheduling policy, produces the execution timeline
//! (Gantt segments) and per-process waiting, turnaround and response
//! times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessRecord`,
//!   `ExecutionInterval`, `SchedulingResult`, `Algorithm`
//! - **`dispatching`**: Selection rules and the tie-breaking rule engine
//! - **`scheduler`**: The six policy simulators, averages and KPIs
//! - **`validation`**: Input checks run before every simulation
//! - **`trace`**: Optional step-by-step event log
//! - **`palette`**: Stable per-process display colors
//! - **`workload`**: Demo and random process batches
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::{Algorithm, ProcessSpec};
//!
//! let processes = vec![
//!     ProcessSpec::new("P1", 0, 8),
//!     ProcessSpec::new("P2", 1, 4),
//!     ProcessSpec::new("P3", 2, 9),
//!     ProcessSpec::new("P4", 3, 5),
//! ];
//! let result = cpu_schedule::run(Algorithm::SjfNonPreemptive, &processes, None).unwrap();
//! assert_eq!(result.completion_order(), vec!["P1", "P2", "P4", "P3"]);
//! assert_eq!(result.average_waiting_time, 7.75);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod palette;
pub mod scheduler;
pub mod trace;
pub mod validation;
pub mod workload;

pub use error::{SimulationError, SimulationResult};
pub use scheduler::run;
