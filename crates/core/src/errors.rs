//! Core error types for the EcoTracker application.
//!
//! Every failure the calculator can report is local to a single request: the
//! caller re-prompts for input, nothing is retried.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the footprint domain.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Footprint calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

/// Errors raised while turning category sub-totals into a result.
#[derive(Error, Debug, PartialEq)]
pub enum CalculatorError {
    #[error("Emission factor '{0}' must be finite and non-negative")]
    InvalidFactor(String),

    #[error("Value {0} cannot be rounded")]
    NonFiniteValue(f64),
}

/// Validation errors for user input and form parsing.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl ValidationError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, e.g. `transport.mode`.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidInput { field, .. } => field,
            ValidationError::MissingField(field) => field,
        }
    }
}

impl Error {
    /// Returns the offending field when this is a validation failure.
    pub fn invalid_field(&self) -> Option<&str> {
        match self {
            Error::Validation(e) => Some(e.field()),
            _ => None,
        }
    }
}
