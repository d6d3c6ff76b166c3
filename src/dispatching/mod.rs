//! Selection rules and rule engine for choosing the next process.
//!
//! Each selecting simulator asks a [`RuleEngine`] which available process
//! gets the CPU. The engine applies its rules in order, falling through
//! to the next rule only on ties, and finally breaks ties by input
//! position so selection never depends on iteration order.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine};
//!
//! // Shortest job first; earlier arrival, then input order, on ties.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A rule that ranks candidate processes.
///
/// # Score Convention
/// **Lower score = higher precedence.** Rules that prefer larger values
/// (e.g. priority) negate them.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a candidate process at the current simulation time.
    fn evaluate(&self, process: &ProcessRecord, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
