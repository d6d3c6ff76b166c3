//! First-Come, First-Served simulator.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (ties: input order).
//! 2. For each, start at `max(now, arrival)` and run to completion.
//!
//! One Gantt segment per process; idle gaps are jumped over in one step.
//!
//! # Complexity
//! O(n log n).

use super::selection::trace_ranked;
use super::state::SimState;
use crate::dispatching::{DispatchContext, RuleEngine};
use crate::error::SimulationResult;
use crate::trace::StepAction;

pub(crate) fn simulate(state: &mut SimState, engine: &RuleEngine) -> SimulationResult<()> {
    let order = engine.sort_indices(
        &state.records,
        0..state.records.len(),
        &DispatchContext::at_time(0),
    );

    for idx in order {
        state.step()?;
        state.idle_until(state.records[idx].arrival_time());
        state.admit_arrivals();

        state.dispatch(idx);
        trace_ranked(state, engine, StepAction::Dispatch, idx);

        let burst = state.records[idx].remaining_time();
        state.execute(idx, burst, false);
        state.finish(idx);
        trace_ranked(state, engine, StepAction::Complete, idx);
    }

    Ok(())
}
