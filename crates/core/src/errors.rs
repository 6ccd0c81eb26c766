//! Core error types for the Finsight application.
//!
//! This module defines transport-agnostic error types. HTTP failures from the
//! data service are converted to these types by the data-service crate.

use thiserror::Error;

use crate::session::Decision;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the finance tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The action gate did not allow the mutation. Not a failure of the
    /// system; the caller opens the prompt named by the decision.
    #[error("Action not allowed: {0}")]
    GateDenied(Decision),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Data service request failed: {0}")]
    DataService(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl Error {
    /// Returns the gate decision when this error is a gate denial.
    pub fn gate_decision(&self) -> Option<Decision> {
        match self {
            Error::GateDenied(decision) => Some(*decision),
            _ => None,
        }
    }
}
