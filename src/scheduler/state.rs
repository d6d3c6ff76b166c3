//! Per-run simulation state shared by all simulators.
//!
//! Holds an arena of [`ProcessRecord`]s indexed by input ordinal. Status
//! flags on the records replace any "is it already completed / queued"
//! containment scans.

use log::{error, trace};

use super::metrics::AverageMetrics;
use crate::error::{SimulationError, SimulationResult};
use crate::models::{
    push_coalesced, Algorithm, ExecutionInterval, ProcessRecord, ProcessSpec, ProcessStatus,
    SchedulingResult,
};
use crate::trace::{SimulationStep, StepAction, TraceRecorder};
use crate::validation::timeline_bound;

pub(crate) struct SimState {
    algorithm: Algorithm,
    pub(crate) records: Vec<ProcessRecord>,
    intervals: Vec<ExecutionInterval>,
    completion_order: Vec<usize>,
    pub(crate) now: i64,
    iterations: u64,
    iteration_limit: u64,
    trace: TraceRecorder,
}

impl SimState {
    pub(crate) fn new(
        algorithm: Algorithm,
        processes: &[ProcessSpec],
        record_trace: bool,
        iteration_limit: Option<u64>,
    ) -> Self {
        let records = processes
            .iter()
            .cloned()
            .enumerate()
            .map(|(ordinal, spec)| ProcessRecord::new(spec, ordinal))
            .collect();
        Self {
            algorithm,
            records,
            intervals: Vec::new(),
            completion_order: Vec::with_capacity(processes.len()),
            now: 0,
            iterations: 0,
            iteration_limit: iteration_limit.unwrap_or_else(|| default_iteration_limit(processes)),
            trace: TraceRecorder::new(record_trace),
        }
    }

    pub(crate) fn all_completed(&self) -> bool {
        self.completion_order.len() == self.records.len()
    }

    pub(crate) fn tracing(&self) -> bool {
        self.trace.is_enabled()
    }

    /// Counts one loop iteration, failing once the cap is exceeded.
    pub(crate) fn step(&mut self) -> SimulationResult<()> {
        self.iterations += 1;
        if self.iterations > self.iteration_limit {
            error!(
                "{} simulation exceeded {} iterations at t={}",
                self.algorithm, self.iteration_limit, self.now
            );
            return Err(self.invariant(format!(
                "no progress after {} iterations (t={}, {}/{} completed)",
                self.iteration_limit,
                self.now,
                self.completion_order.len(),
                self.records.len()
            )));
        }
        Ok(())
    }

    pub(crate) fn invariant(&self, message: impl Into<String>) -> SimulationError {
        SimulationError::InvariantViolation {
            algorithm: self.algorithm,
            message: message.into(),
        }
    }

    /// Moves every arrived `Pending` process to `Ready`.
    ///
    /// Returns the newly admitted indices by arrival time, then input order.
    pub(crate) fn admit_arrivals(&mut self) -> Vec<usize> {
        let now = self.now;
        let mut admitted: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.status() == ProcessStatus::Pending && r.arrival_time() <= now)
            .map(|(i, _)| i)
            .collect();
        admitted.sort_by_key(|&i| (self.records[i].arrival_time(), i));
        for &i in &admitted {
            self.records[i].admit();
        }
        admitted
    }

    /// Indices of processes waiting for the CPU.
    pub(crate) fn ready_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.status() == ProcessStatus::Ready)
            .map(|(i, _)| i)
    }

    /// Indices of arrived, unfinished processes, including the running one.
    pub(crate) fn available_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let now = self.now;
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.is_available_at(now))
            .map(|(i, _)| i)
    }

    /// Advances the clock one tick with no process on the CPU.
    pub(crate) fn idle(&mut self) {
        trace!("t={}: idle", self.now);
        self.trace.record_idle(self.now);
        self.now += 1;
    }

    /// Jumps the clock forward to `time` with the CPU idle.
    pub(crate) fn idle_until(&mut self, time: i64) {
        if time > self.now {
            trace!("t={}: idle until t={time}", self.now);
            self.trace.record_idle(self.now);
            self.now = time;
        }
    }

    pub(crate) fn dispatch(&mut self, idx: usize) {
        trace!("t={}: dispatch {}", self.now, self.records[idx].id());
        self.records[idx].dispatch(self.now);
    }

    pub(crate) fn preempt(&mut self, idx: usize) {
        trace!("t={}: preempt {}", self.now, self.records[idx].id());
        self.records[idx].preempt();
    }

    /// Runs `idx` for `amount` ticks and emits its Gantt segment.
    ///
    /// With `coalesce`, a segment that continues the previous one on the
    /// same process extends it instead of starting a new one.
    pub(crate) fn execute(&mut self, idx: usize, amount: i64, coalesce: bool) {
        let start = self.now;
        let record = &mut self.records[idx];
        record.run_for(amount);
        self.now += amount;

        let interval =
            ExecutionInterval::new(record.id(), start, self.now, record.ordinal());
        if coalesce {
            push_coalesced(&mut self.intervals, interval);
        } else {
            self.intervals.push(interval);
        }
    }

    pub(crate) fn finish(&mut self, idx: usize) {
        trace!("t={}: complete {}", self.now, self.records[idx].id());
        self.records[idx].complete(self.now);
        self.completion_order.push(idx);
    }

    /// Appends a trace step about `idx`, with `waiting` as the ready queue.
    pub(crate) fn trace_event(&mut self, action: StepAction, idx: usize, waiting: &[usize]) {
        self.trace.record(|| {
            let ready_queue = waiting
                .iter()
                .map(|&i| self.records[i].id().to_string())
                .collect();
            SimulationStep::for_process(self.now, action, self.records[idx].id(), ready_queue)
        });
    }

    /// Builds the immutable result (and trace) from a finished run.
    pub(crate) fn into_outcome(self) -> SimulationResult<(SchedulingResult, Vec<SimulationStep>)> {
        if !self.all_completed() {
            return Err(self.invariant(format!(
                "run ended with {}/{} processes completed",
                self.completion_order.len(),
                self.records.len()
            )));
        }

        let Some(averages) = AverageMetrics::calculate(&self.records) else {
            return Err(self.invariant("no completed processes to average"));
        };

        let mut slots: Vec<Option<ProcessRecord>> = self.records.into_iter().map(Some).collect();
        let processes = self
            .completion_order
            .iter()
            .filter_map(|&i| slots[i].take())
            .collect();

        let result = SchedulingResult {
            algorithm: self.algorithm,
            processes,
            intervals: self.intervals,
            total_time: self.now,
            average_waiting_time: averages.average_waiting_time,
            average_turnaround_time: averages.average_turnaround_time,
            average_response_time: averages.average_response_time,
        };
        Ok((result, self.trace.into_steps()))
    }
}

/// Upper bound on loop iterations for a correct run.
///
/// Every iteration either executes at least one tick or idles one tick,
/// and idling can only happen before the last arrival.
pub(crate) fn default_iteration_limit(processes: &[ProcessSpec]) -> u64 {
    let ticks = timeline_bound(processes)
        .and_then(|t| u64::try_from(t).ok())
        .unwrap_or(u64::MAX);
    ticks
        .saturating_add(processes.len() as u64)
        .saturating_add(1)
}
