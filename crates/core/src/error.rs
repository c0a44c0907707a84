//! Estimation error model.

use thiserror::Error;

/// Result type used at the estimation boundary.
pub type EstimationOutcome<T> = Result<T, EstimationError>;

/// Errors surfaced to callers of the estimation engine.
///
/// Oracle outages and unknown categories are recovered internally and never
/// show up here. Only input the engine cannot work with is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimationError {
    /// The item input failed validation (empty name, unparseable date).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl EstimationError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
