//! Execution interval (Gantt segment) model.

use serde::{Deserialize, Serialize};

use crate::palette;

/// A contiguous span during which one process occupies the CPU.
///
/// Half-open: `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionInterval {
    /// Process holding the CPU.
    pub process_id: String,
    /// First tick of the span.
    pub start_time: i64,
    /// Tick after the last executed unit.
    pub end_time: i64,
    /// Input ordinal of the process, used for color lookup.
    pub color_index: usize,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(
        process_id: impl Into<String>,
        start_time: i64,
        end_time: i64,
        color_index: usize,
    ) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
            color_index,
        }
    }

    /// Span length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Display color assigned to the owning process.
    pub fn color(&self) -> &'static str {
        palette::color_for(self.color_index)
    }

    /// Whether `other` starts exactly where this span ends on the same process.
    #[inline]
    pub fn is_continued_by(&self, other: &ExecutionInterval) -> bool {
        self.process_id == other.process_id && self.end_time == other.start_time
    }

    /// Whether two spans share at least one tick.
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

/// Appends `interval`, extending the last span instead when it is
/// continued by `interval`.
pub(crate) fn push_coalesced(intervals: &mut Vec<ExecutionInterval>, interval: ExecutionInterval) {
    match intervals.last_mut() {
        Some(last) if last.is_continued_by(&interval) => last.end_time = interval.end_time,
        _ => intervals.push(interval),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        assert_eq!(ExecutionInterval::new("P1", 3, 8, 0).duration(), 5);
    }

    #[test]
    fn test_coalesce_contiguous_same_process() {
        let mut spans = vec![ExecutionInterval::new("P1", 0, 1, 0)];
        push_coalesced(&mut spans, ExecutionInterval::new("P1", 1, 2, 0));
        assert_eq!(spans, vec![ExecutionInterval::new("P1", 0, 2, 0)]);
    }

    #[test]
    fn test_no_coalesce_across_gap() {
        let mut spans = vec![ExecutionInterval::new("P1", 0, 1, 0)];
        push_coalesced(&mut spans, ExecutionInterval::new("P1", 3, 4, 0));
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_no_coalesce_different_process() {
        let mut spans = vec![ExecutionInterval::new("P1", 0, 1, 0)];
        push_coalesced(&mut spans, ExecutionInterval::new("P2", 1, 2, 1));
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].process_id, "P2");
    }

    #[test]
    fn test_overlaps() {
        let a = ExecutionInterval::new("P1", 0, 4, 0);
        assert!(a.overlaps(&ExecutionInterval::new("P2", 3, 5, 1)));
        assert!(!a.overlaps(&ExecutionInterval::new("P2", 4, 5, 1)));
    }

    #[test]
    fn test_color_follows_index() {
        let a = ExecutionInterval::new("P1", 0, 1, 2);
        assert_eq!(a.color(), palette::color_for(2));
    }
}
