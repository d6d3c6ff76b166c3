//! Built-in selection rules.
//!
//! | Rule | Prefers | Used by |
//! |------|---------|---------|
//! | `EarliestArrival` | lowest `arrival_time` | FCFS, tie-breaker everywhere |
//! | `ShortestBurst` | lowest `burst_time` | SJF |
//! | `ShortestRemaining` | lowest `remaining_time` | SRTF |
//! | `HighestPriority` | highest `priority` | Priority |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchContext, RuleScore, SelectionRule};
use crate::models::ProcessRecord;

/// First-Come, First-Served.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &DispatchContext) -> RuleScore {
        process.arrival_time()
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with the smallest total burst. Minimizes mean
/// waiting time among run-to-completion policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &DispatchContext) -> RuleScore {
        process.burst_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Like `ShortestBurst`, but ranks on the burst still owed.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &DispatchContext) -> RuleScore {
        process.remaining_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Highest priority first.
///
/// Higher `priority` value wins. A missing priority counts as 0.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &DispatchContext) -> RuleScore {
        -RuleScore::from(process.spec().effective_priority())
    }

    fn description(&self) -> &'static str {
        "Highest Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn record(id: &str, arrival: i64, burst: i64, priority: Option<i32>) -> ProcessRecord {
        let mut spec = ProcessSpec::new(id, arrival, burst);
        spec.priority = priority;
        ProcessRecord::new(spec, 0)
    }

    #[test]
    fn test_earliest_arrival() {
        let ctx = DispatchContext::at_time(10);
        let early = record("early", 1, 9, None);
        let late = record("late", 5, 1, None);
        assert!(EarliestArrival.evaluate(&early, &ctx) < EarliestArrival.evaluate(&late, &ctx));
    }

    #[test]
    fn test_shortest_burst() {
        let ctx = DispatchContext::at_time(0);
        let short = record("short", 3, 2, None);
        let long = record("long", 0, 8, None);
        assert!(ShortestBurst.evaluate(&short, &ctx) < ShortestBurst.evaluate(&long, &ctx));
    }

    #[test]
    fn test_shortest_remaining_tracks_progress() {
        let ctx = DispatchContext::at_time(0);
        let mut worked = record("worked", 0, 8, None);
        let fresh = record("fresh", 0, 5, None);
        assert!(ShortestRemaining.evaluate(&fresh, &ctx) < ShortestRemaining.evaluate(&worked, &ctx));

        worked.admit();
        worked.dispatch(0);
        worked.run_for(4);
        assert!(ShortestRemaining.evaluate(&worked, &ctx) < ShortestRemaining.evaluate(&fresh, &ctx));
    }

    #[test]
    fn test_highest_priority() {
        let ctx = DispatchContext::at_time(0);
        let high = record("high", 0, 1, Some(10));
        let low = record("low", 0, 1, Some(1));
        let none = record("none", 0, 1, None);
        assert!(HighestPriority.evaluate(&high, &ctx) < HighestPriority.evaluate(&low, &ctx));
        assert!(HighestPriority.evaluate(&low, &ctx) < HighestPriority.evaluate(&none, &ctx));
    }

    #[test]
    fn test_negative_priority_below_missing() {
        let ctx = DispatchContext::at_time(0);
        let negative = record("neg", 0, 1, Some(-2));
        let none = record("none", 0, 1, None);
        assert!(HighestPriority.evaluate(&none, &ctx) < HighestPriority.evaluate(&negative, &ctx));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(EarliestArrival.name(), "FCFS");
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(ShortestRemaining.name(), "SRTF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
    }
}
