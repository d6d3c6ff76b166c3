//! Rule engine for multi-criteria selection.
//!
//! Composes selection rules into a lexicographic comparator: the first
//! rule decides, later rules only break ties, and input position breaks
//! whatever ties remain.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchContext, SelectionRule};
use crate::models::{Algorithm, ProcessRecord};

/// A composable, deterministic selection engine.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, input order decides.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Rule chain for a selecting policy.
    ///
    /// Every chain ends with `EarliestArrival` and then input order.
    /// Returns `None` for Round Robin, which dispatches from a FIFO queue.
    pub fn for_algorithm(algorithm: Algorithm) -> Option<Self> {
        let engine = match algorithm {
            Algorithm::Fcfs => Self::new().with_rule(rules::EarliestArrival),
            Algorithm::SjfNonPreemptive => Self::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::EarliestArrival),
            Algorithm::SjfPreemptive => Self::new()
                .with_rule(rules::ShortestRemaining)
                .with_tie_breaker(rules::EarliestArrival),
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive => Self::new()
                .with_rule(rules::HighestPriority)
                .with_tie_breaker(rules::EarliestArrival),
            Algorithm::RoundRobin => return None,
        };
        Some(engine)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when every earlier rule ties.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Orders two processes; `Less` means `a` runs first.
    pub fn compare(&self, a: &ProcessRecord, b: &ProcessRecord, context: &DispatchContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.ordinal().cmp(&b.ordinal())
    }

    /// Index (into `records`) of the candidate that should run next.
    pub fn select_best<I>(
        &self,
        records: &[ProcessRecord],
        candidates: I,
        context: &DispatchContext,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(&records[a], &records[b], context))
    }

    /// Candidates sorted from first to last to run.
    pub fn sort_indices<I>(
        &self,
        records: &[ProcessRecord],
        candidates: I,
        context: &DispatchContext,
    ) -> Vec<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut indices: Vec<usize> = candidates.into_iter().collect();
        indices.sort_by(|&a, &b| self.compare(&records[a], &records[b], context));
        indices
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
