//! Custom error types for Solo
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::flow::step::FlowStep;

/// The main error type for Solo operations
#[derive(Error, Debug)]
pub enum SoloError {
    /// A draft failed validation outside the gated flow path
    #[error("Validation error: {0}")]
    Validation(String),

    /// `advance` or `finish` was called while the current step's gate fails.
    /// Correctly wired callers consult `can_advance` first, so hitting this
    /// variant indicates a programming defect, not a user mistake.
    #[error("Flow precondition violated: step '{step}' does not pass its gate")]
    Precondition { step: FlowStep },

    /// Terminal or event-channel I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl SoloError {
    /// Create a precondition-violation error for the given step
    pub fn precondition(step: FlowStep) -> Self {
        Self::Precondition { step }
    }

    /// Create a validation error for a missing or invalid field
    pub fn invalid_field(field: &'static str) -> Self {
        Self::Validation(format!("field '{}' is missing or invalid", field))
    }

    /// Check if this is a precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }
}

impl From<std::io::Error> for SoloError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Solo operations
pub type SoloResult<T> = Result<T, SoloError>;
