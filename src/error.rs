//! Engine error type.

use std::fmt;

use crate::models::Algorithm;
use crate::validation::ValidationError;

/// Result alias for engine entry points.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors returned by a simulation run.
///
/// No partial result accompanies an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The batch or run configuration was rejected before simulating.
    InvalidConfiguration(Vec<ValidationError>),
    /// A simulator stopped making progress. Indicates a bug.
    InvariantViolation {
        /// Policy that was running.
        algorithm: Algorithm,
        /// What went wrong.
        message: String,
    },
}

impl SimulationError {
    /// Validation errors, if this is a configuration error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidConfiguration(errors) => errors,
            SimulationError::InvariantViolation { .. } => &[],
        }
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, SimulationError::InvalidConfiguration(_))
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidConfiguration(errors) => {
                write!(f, "invalid configuration")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
            SimulationError::InvariantViolation { algorithm, message } => {
                write!(f, "{algorithm} simulation invariant violated: {message}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidConfiguration(errors)
    }
}

impl From<ValidationError> for SimulationError {
    fn from(error: ValidationError) -> Self {
        SimulationError::InvalidConfiguration(vec![error])
    }
}
