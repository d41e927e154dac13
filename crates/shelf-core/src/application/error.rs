//! Application layer errors.
//!
//! These errors represent failures in orchestration and storage, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::CategoryId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A repository was asked to save nothing.
    #[error("Cannot save a missing category")]
    NilEntity,

    /// No stored category has the requested id.
    #[error("Category {id} not found")]
    NotFound { id: CategoryId },

    /// Store access failed (lock poisoned).
    #[error("Category store error")]
    StoreLockError,

    /// A storage backend could not read or write its data.
    #[error("Persistence failed: {reason}")]
    Persistence { reason: String },

    /// A presenter could not encode its output.
    #[error("Failed to render {format} output: {reason}")]
    Presentation { format: &'static str, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { id } => vec![
                format!("No category has id {}", id),
                "Try: shelf list to see stored categories".into(),
            ],
            Self::StoreLockError => vec![
                "The category store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Persistence { .. } => vec![
                "Check that the storage file is readable and writable".into(),
                "Use --store memory to run without a storage file".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::NilEntity
            | Self::StoreLockError
            | Self::Persistence { .. }
            | Self::Presentation { .. } => ErrorCategory::Internal,
        }
    }
}
