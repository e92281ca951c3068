//! Interest rate domain errors
//!
//! Callers can tell a missing record, a rejected input and an infrastructure
//! failure apart by matching on the variant.

use core_kernel::{InterestRateId, PortError, TemporalError};
use thiserror::Error;

/// Errors that can occur in the interest rate domain
#[derive(Debug, Error)]
pub enum InterestRateError {
    /// No interest rate exists for the given identifier
    #[error("Interest rate not found: {0}")]
    NotFound(InterestRateId),

    /// Input or resulting record violates the entity invariants
    #[error("Invalid interest rate: {0}")]
    Validation(String),

    /// The repository failed; the original error is carried as-is
    #[error(transparent)]
    Repository(#[from] PortError),
}

impl InterestRateError {
    /// Creates a Validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        InterestRateError::Validation(message.into())
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, InterestRateError::NotFound(_))
    }

    /// Checks if this error is an input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, InterestRateError::Validation(_))
    }
}

impl From<TemporalError> for InterestRateError {
    fn from(error: TemporalError) -> Self {
        InterestRateError::Validation(error.to_string())
    }
}
