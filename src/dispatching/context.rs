//! Dispatch context for selection rule evaluation.

/// Runtime state passed to selection rules.
///
/// The built-in rules rank on static or remaining work only. Rules that
/// age waiting processes (response ratio, waiting-time boosts) read
/// `current_time` from here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation time (ticks).
    pub current_time: i64,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
