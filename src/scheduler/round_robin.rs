//! Round Robin simulator.
//!
//! # Algorithm
//!
//! 1. Processes arriving at t=0 seed a FIFO ready queue (input order).
//! 2. Each iteration admits new arrivals to the tail, then dispatches the
//!    head for `min(quantum, remaining)` ticks as one Gantt segment.
//! 3. Processes that arrived during the slice are queued *before* the
//!    just-run process goes back to the tail.
//! 4. An empty queue idles the CPU for one tick.
//!
//! Slices are never coalesced: two back-to-back slices of the same process
//! stay two segments.

use std::collections::VecDeque;

use super::state::SimState;
use crate::error::SimulationResult;
use crate::trace::StepAction;

pub(crate) fn simulate(state: &mut SimState, quantum: i64) -> SimulationResult<()> {
    let mut queue: VecDeque<usize> = state.admit_arrivals().into();

    while !state.all_completed() || !queue.is_empty() {
        state.step()?;
        queue.extend(state.admit_arrivals());

        let Some(idx) = queue.pop_front() else {
            state.idle();
            continue;
        };

        state.dispatch(idx);
        trace_queue(state, &queue, StepAction::Dispatch, idx);

        let slice = quantum.min(state.records[idx].remaining_time());
        state.execute(idx, slice, false);

        // Mid-slice arrivals go ahead of the process that just ran.
        queue.extend(state.admit_arrivals());

        if state.records[idx].remaining_time() == 0 {
            state.finish(idx);
            trace_queue(state, &queue, StepAction::Complete, idx);
        } else {
            state.preempt(idx);
            queue.push_back(idx);
            trace_queue(state, &queue, StepAction::Preempt, idx);
        }
    }

    Ok(())
}

fn trace_queue(state: &mut SimState, queue: &VecDeque<usize>, action: StepAction, idx: usize) {
    if state.tracing() {
        let waiting: Vec<usize> = queue.iter().copied().collect();
        state.trace_event(action, idx, &waiting);
    }
}
