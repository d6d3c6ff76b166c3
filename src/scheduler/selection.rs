//! Selecting simulators: SJF, SRTF and both Priority variants.
//!
//! One loop serves all four policies. The [`RuleEngine`] decides which
//! available process runs next; the [`PreemptionMode`] decides how long
//! it keeps the CPU.
//!
//! # Algorithm
//!
//! ```text
//! while some process is unfinished:
//!     admit arrivals at `now`
//!     pick the best available process (rule chain, then input order)
//!     none available → idle one tick
//!     RunToCompletion → run its whole burst, one segment
//!     UnitStep        → run one tick, extending the previous segment
//!                       when the same process keeps the CPU
//! ```
//!
//! Preemption is only observed at tick boundaries.

use super::state::SimState;
use crate::dispatching::{DispatchContext, RuleEngine};
use crate::error::SimulationResult;
use crate::models::Algorithm;
use crate::trace::StepAction;

/// How long a selected process keeps the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreemptionMode {
    /// Until its burst is exhausted.
    RunToCompletion,
    /// One tick; selection is repeated every tick.
    UnitStep,
}

impl PreemptionMode {
    pub(crate) fn for_algorithm(algorithm: Algorithm) -> Self {
        if algorithm.is_preemptive() {
            PreemptionMode::UnitStep
        } else {
            PreemptionMode::RunToCompletion
        }
    }
}

pub(crate) fn simulate(
    state: &mut SimState,
    engine: &RuleEngine,
    mode: PreemptionMode,
) -> SimulationResult<()> {
    let mut running: Option<usize> = None;

    while !state.all_completed() {
        state.step()?;
        state.admit_arrivals();

        let ctx = DispatchContext::at_time(state.now);
        let Some(idx) = engine.select_best(&state.records, state.available_indices(), &ctx)
        else {
            state.idle();
            continue;
        };

        match mode {
            PreemptionMode::RunToCompletion => {
                state.dispatch(idx);
                trace_ranked(state, engine, StepAction::Dispatch, idx);

                let burst = state.records[idx].remaining_time();
                state.execute(idx, burst, false);
                state.finish(idx);
                trace_ranked(state, engine, StepAction::Complete, idx);
            }
            PreemptionMode::UnitStep => {
                if let Some(prev) = running.filter(|&prev| prev != idx) {
                    state.preempt(prev);
                    trace_ranked(state, engine, StepAction::Preempt, prev);
                }
                if running != Some(idx) {
                    state.dispatch(idx);
                    trace_ranked(state, engine, StepAction::Dispatch, idx);
                }

                state.execute(idx, 1, true);

                if state.records[idx].remaining_time() == 0 {
                    state.finish(idx);
                    trace_ranked(state, engine, StepAction::Complete, idx);
                    running = None;
                } else {
                    running = Some(idx);
                }
            }
        }
    }

    Ok(())
}

/// Records a trace step whose ready queue is ranked by `engine`.
pub(super) fn trace_ranked(
    state: &mut SimState,
    engine: &RuleEngine,
    action: StepAction,
    idx: usize,
) {
    if !state.tracing() {
        return;
    }
    let ctx = DispatchContext::at_time(state.now);
    let waiting = engine.sort_indices(&state.records, state.ready_indices(), &ctx);
    state.trace_event(action, idx, &waiting);
}
