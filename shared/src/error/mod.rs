//! Unified error system for the composer engine
//!
//! This module provides:
//! - [`Error`]: the engine error taxonomy (validation / remote / conflict)
//! - [`DeleteFailure`] and [`classify_delete_failure`]: the delete-conflict
//!   classifier for heterogeneous backend error payloads
//!
//! Every failure is recoverable: validation errors leave the draft untouched,
//! remote errors preserve client state for correction and resubmission, and
//! conflicts trigger an explanatory notice instead of a generic banner.

mod classify;

pub use classify::{DeleteFailure, classify_delete_failure};

use thiserror::Error;

/// Unified error type for the composer engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Locally detected, pre-network. Correcting the input always recovers.
    #[error("{message}")]
    Validation { message: String },

    /// Network or backend failure on a mutating call. The backend message is
    /// surfaced verbatim; no automatic retry.
    #[error("{message}")]
    Remote { message: String },

    /// Delete blocked by existing references, classified from the backend
    /// payload.
    #[error("{}", .failure.user_message())]
    Conflict { failure: DeleteFailure },
}

impl Error {
    // ========== Convenient constructors ==========

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a Remote error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Create a Conflict error from a classified delete failure
    pub fn conflict(failure: DeleteFailure) -> Self {
        Self::Conflict { failure }
    }

    /// True for locally detected validation failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Human-readable message for display
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } | Self::Remote { message } => message.clone(),
            Self::Conflict { failure } => failure.user_message().to_string(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
