//! Core calculator backend
//!
//! The engine is a button-driven state machine: digits build up the display,
//! operator buttons consume it. Everything here is synchronous and owned by a
//! single presentation session.

pub mod action;
pub mod engine;
pub mod format;
mod operations;

pub use action::Action;
pub use engine::{CalculatorEngine, EngineSnapshot};
pub use format::{format_number, parse_number};
pub use operations::{BinaryOp, UnaryOp};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Arithmetic never fails: division by zero and domain errors surface as
/// infinity or NaN on the display instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Malformed digit, operator token or key identifier
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Action not allowed in the current state (e.g. a second decimal point)
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Error message
        message: String,
    },
}

impl CalcError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid state error
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Returns true for [`CalcError::InvalidArgument`]
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true for [`CalcError::InvalidState`]
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
