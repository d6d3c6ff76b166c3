//! Average waiting, turnaround and response time.
//!
//! Folded from the completed records of any simulator.

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Arithmetic means over all completed processes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageMetrics {
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
}

impl AverageMetrics {
    /// Computes the three means.
    ///
    /// Returns `None` for an empty slice; there is nothing to average.
    pub fn calculate(records: &[ProcessRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        // Per-process times fit in i64; their sums may not.
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        for r in records {
            total_waiting += i128::from(r.waiting_time().unwrap_or(0));
            total_turnaround += i128::from(r.turnaround_time().unwrap_or(0));
            total_response += i128::from(r.response_time().unwrap_or(0));
        }

        let n = records.len() as f64;
        Some(Self {
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
            average_response_time: total_response as f64 / n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    /// Runs a record start-to-finish without interruption.
    fn finished(id: &str, arrival: i64, burst: i64, start: i64) -> ProcessRecord {
        let mut r = ProcessRecord::new(ProcessSpec::new(id, arrival, burst), 0);
        r.admit();
        r.dispatch(start);
        r.run_for(burst);
        r.complete(start + burst);
        r
    }

    #[test]
    fn test_averages() {
        let records = vec![finished("P1", 0, 8, 0), finished("P2", 1, 4, 8)];
        let m = AverageMetrics::calculate(&records).unwrap();
        // waiting: 0, 7 ; turnaround: 8, 11 ; response: 0, 7
        assert!((m.average_waiting_time - 3.5).abs() < 1e-10);
        assert!((m.average_turnaround_time - 9.5).abs() < 1e-10);
        assert!((m.average_response_time - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_single() {
        let m = AverageMetrics::calculate(&[finished("P1", 0, 5, 0)]).unwrap();
        assert_eq!(m.average_waiting_time, 0.0);
        assert_eq!(m.average_turnaround_time, 5.0);
        assert_eq!(m.average_response_time, 0.0);
    }

    #[test]
    fn test_large_times_do_not_overflow() {
        let half = i64::MAX / 2;
        let records = vec![
            finished("P1", 0, half, 0),
            finished("P2", 0, half, half),
        ];
        let m = AverageMetrics::calculate(&records).unwrap();
        let expected = (half as f64 + 2.0 * half as f64) / 2.0;
        assert!((m.average_turnaround_time - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_empty() {
        assert!(AverageMetrics::calculate(&[]).is_none());
    }
}
