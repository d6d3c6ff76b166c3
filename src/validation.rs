//! Input validation for simulation runs.
//!
//! Checks a process batch and its run configuration before any
//! simulation starts. Detects:
//! - Empty batches, empty or duplicate IDs
//! - Negative arrival times and non-positive burst times
//! - Missing priorities under a priority policy
//! - Missing or non-positive time quantum under Round Robin
//! - Batches whose timeline would not fit in an `i64` tick count
//!
//! All problems are collected, not only the first one.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Algorithm, ProcessSpec};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Algorithm tag does not name a supported policy.
    UnknownAlgorithm,
    /// No processes supplied.
    EmptyBatch,
    /// A process has an empty ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// `arrival_time < 0`.
    NegativeArrival,
    /// `burst_time <= 0`.
    NonPositiveBurst,
    /// Priority policy selected but a process has no priority.
    MissingPriority,
    /// Round Robin selected without a time quantum.
    MissingTimeQuantum,
    /// `time_quantum <= 0`.
    NonPositiveTimeQuantum,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a batch and its configuration for `algorithm`.
///
/// Checks:
/// 1. The batch is not empty
/// 2. No empty or duplicate process IDs
/// 3. `arrival_time >= 0` and `burst_time >= 1` for every process
/// 4. Every process has a priority if the policy needs one
/// 5. A positive time quantum is present if the policy needs one
/// 6. `max(arrival_time) + sum(burst_time)` fits in an `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(
    algorithm: Algorithm,
    processes: &[ProcessSpec],
    time_quantum: Option<i64>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for (index, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {index} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if algorithm.requires_priority() && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' needs a priority for {algorithm}", p.id),
            ));
        }
    }

    if algorithm.requires_time_quantum() {
        match time_quantum {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingTimeQuantum,
                format!("{algorithm} requires a time quantum"),
            )),
            Some(q) if q <= 0 => errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveTimeQuantum,
                format!("Time quantum must be positive, got {q}"),
            )),
            Some(_) => {}
        }
    }

    if timeline_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest time any simulation of `processes` can reach, or `None` on overflow.
///
/// Negative arrivals and bursts count as zero; they are reported separately.
pub(crate) fn timeline_bound(processes: &[ProcessSpec]) -> Option<i64> {
    let max_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(max_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}
