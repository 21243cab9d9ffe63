//! Model Error Types
//!
//! Errors raised by model implementations. Decorators and wrappers never
//! produce, translate or retry these; they travel unchanged to the caller.

use thiserror::Error;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors surfaced by the instances behind a model contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Requested item does not exist
    #[error("Item not found: {message}")]
    NotFound { message: String },

    /// Operation is not valid in the current state
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    /// Operation is not offered by this item
    #[error("Operation not supported: {operation}")]
    NotSupported { operation: String },

    /// Index outside the bounds of a collection
    #[error("Index {index} out of range for collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Caller cancelled the operation
    #[error("Operation cancelled")]
    Cancelled,

    /// Operation did not complete in time
    #[error("Operation timed out: {message}")]
    Timeout { message: String },

    /// Failure reported by a music provider
    #[error("Core error: {message}")]
    Core { message: String },
}

impl ModelError {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound { message: message.into() }
    }

    /// Create an invalid state error
    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Self::InvalidState { message: message.into() }
    }

    /// Create a not supported error
    pub fn not_supported<S: Into<String>>(operation: S) -> Self {
        Self::NotSupported { operation: operation.into() }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout { message: message.into() }
    }

    /// Create a core error
    pub fn core<S: Into<String>>(message: S) -> Self {
        Self::Core { message: message.into() }
    }

    /// Check if the caller asked for this outcome
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ModelError::Cancelled)
    }
}
