//! Process model.
//!
//! A process is the unit of work handed to the CPU. The caller describes
//! each one with an immutable [`ProcessSpec`]; the simulators derive a
//! [`ProcessRecord`] per spec and fill in its timing fields as the
//! corresponding simulation events happen.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// An input process description.
///
/// Supplied once per run and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSpec {
    /// Unique process identifier within a batch.
    pub id: String,
    /// Tick at which the process becomes eligible for scheduling.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
    /// Scheduling priority (higher = more important).
    ///
    /// Required by the priority policies, ignored by the others.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl ProcessSpec {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for selection. Missing priority counts as 0.
    #[inline]
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }
}

/// Lifecycle of a process inside one simulation run.
///
/// ```text
/// Pending ──arrive──▶ Ready ──dispatch──▶ Running ──finish──▶ Completed
///                       ▲                    │
///                       └─────preempt────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessStatus {
    /// Not yet arrived (or not yet admitted to the ready set).
    Pending,
    /// Arrived and waiting for the CPU.
    Ready,
    /// Currently holding the CPU.
    Running,
    /// All burst time consumed.
    Completed,
}

/// Working copy of a process with simulation-derived timings.
///
/// Timing fields stay `None` until the matching event occurs and are
/// written exactly once. `remaining_time` is the only field that changes
/// more than once, and it only ever decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    #[serde(flatten)]
    spec: ProcessSpec,
    ordinal: usize,
    status: ProcessStatus,
    remaining_time: i64,
    start_time: Option<i64>,
    completion_time: Option<i64>,
    turnaround_time: Option<i64>,
    waiting_time: Option<i64>,
    response_time: Option<i64>,
}

impl ProcessRecord {
    /// Creates a pending record for the spec at `ordinal` in the input batch.
    pub fn new(spec: ProcessSpec, ordinal: usize) -> Self {
        let remaining_time = spec.burst_time;
        Self {
            spec,
            ordinal,
            status: ProcessStatus::Pending,
            remaining_time,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            response_time: None,
        }
    }

    /// The input spec this record was derived from.
    pub fn spec(&self) -> &ProcessSpec {
        &self.spec
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn arrival_time(&self) -> i64 {
        self.spec.arrival_time
    }

    pub fn burst_time(&self) -> i64 {
        self.spec.burst_time
    }

    pub fn priority(&self) -> Option<i32> {
        self.spec.priority
    }

    /// Position of the process in the caller-supplied batch.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Tick of the first dispatch.
    pub fn start_time(&self) -> Option<i64> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<i64> {
        self.completion_time
    }

    /// `completion_time - arrival_time`.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.turnaround_time
    }

    /// `turnaround_time - burst_time`.
    pub fn waiting_time(&self) -> Option<i64> {
        self.waiting_time
    }

    /// `start_time - arrival_time`.
    pub fn response_time(&self) -> Option<i64> {
        self.response_time
    }

    /// Whether the process has arrived by `now` and still needs the CPU.
    #[inline]
    pub fn is_available_at(&self, now: i64) -> bool {
        self.spec.arrival_time <= now
            && self.remaining_time > 0
            && self.status != ProcessStatus::Completed
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProcessStatus::Completed
    }

    pub(crate) fn admit(&mut self) {
        debug_assert_eq!(self.status, ProcessStatus::Pending);
        self.status = ProcessStatus::Ready;
    }

    /// Hands the CPU to this process. Records start and response time on
    /// the first dispatch only.
    pub(crate) fn dispatch(&mut self, now: i64) {
        debug_assert_eq!(self.status, ProcessStatus::Ready);
        self.status = ProcessStatus::Running;
        if self.start_time.is_none() {
            self.start_time = Some(now);
            self.response_time = Some(now - self.spec.arrival_time);
        }
    }

    pub(crate) fn preempt(&mut self) {
        debug_assert_eq!(self.status, ProcessStatus::Running);
        self.status = ProcessStatus::Ready;
    }

    /// Consumes `amount` ticks of remaining burst.
    pub(crate) fn run_for(&mut self, amount: i64) {
        debug_assert!(amount > 0 && amount <= self.remaining_time);
        self.remaining_time -= amount;
    }

    /// Finalizes completion-derived metrics at `now`.
    pub(crate) fn complete(&mut self, now: i64) {
        debug_assert_eq!(self.remaining_time, 0);
        debug_assert!(self.completion_time.is_none());
        let turnaround = now - self.spec.arrival_time;
        self.status = ProcessStatus::Completed;
        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.spec.burst_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = ProcessSpec::new("P1", 3, 7).with_priority(4);
        assert_eq!(spec.id, "P1");
        assert_eq!(spec.arrival_time, 3);
        assert_eq!(spec.burst_time, 7);
        assert_eq!(spec.priority, Some(4));
        assert_eq!(spec.effective_priority(), 4);
    }

    #[test]
    fn test_missing_priority_is_zero() {
        assert_eq!(ProcessSpec::new("P1", 0, 1).effective_priority(), 0);
    }

    #[test]
    fn test_record_starts_pending() {
        let rec = ProcessRecord::new(ProcessSpec::new("P1", 2, 5), 3);
        assert_eq!(rec.status(), ProcessStatus::Pending);
        assert_eq!(rec.remaining_time(), 5);
        assert_eq!(rec.ordinal(), 3);
        assert!(rec.start_time().is_none());
        assert!(rec.completion_time().is_none());
        assert!(rec.waiting_time().is_none());
    }

    #[test]
    fn test_record_lifecycle() {
        let mut rec = ProcessRecord::new(ProcessSpec::new("P1", 2, 5), 0);
        rec.admit();
        rec.dispatch(4);
        rec.run_for(2);
        rec.preempt();
        rec.dispatch(9);
        rec.run_for(3);
        rec.complete(12);

        // Start time is pinned to the first dispatch.
        assert_eq!(rec.start_time(), Some(4));
        assert_eq!(rec.response_time(), Some(2));
        assert_eq!(rec.completion_time(), Some(12));
        assert_eq!(rec.turnaround_time(), Some(10));
        assert_eq!(rec.waiting_time(), Some(5));
        assert!(rec.is_completed());
        assert!(!rec.is_available_at(20));
    }

    #[test]
    fn test_availability() {
        let rec = ProcessRecord::new(ProcessSpec::new("P1", 5, 1), 0);
        assert!(!rec.is_available_at(4));
        assert!(rec.is_available_at(5));
    }

    #[test]
    fn test_spec_json_field_names() {
        let spec = ProcessSpec::new("P1", 0, 8).with_priority(3);
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"arrivalTime\":0"));
        assert!(json.contains("\"burstTime\":8"));

        let parsed: ProcessSpec =
            serde_json::from_str(r#"{"id":"P2","arrivalTime":1,"burstTime":4}"#).unwrap();
        assert_eq!(parsed, ProcessSpec::new("P2", 1, 4));
    }
}
