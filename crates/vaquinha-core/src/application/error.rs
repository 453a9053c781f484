//! Application layer errors.
//!
//! These errors represent failures in orchestration. A rejected donation is
//! reported here so callers get its messages alongside a failing `Result`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The donation (or its attachments) failed validation.
    #[error("Donation rejected: {}", messages.join("; "))]
    DonationRejected { messages: Vec<String> },

    /// Repository read/write failed.
    #[error("Repository error at {path}: {reason}")]
    RepositoryError { path: PathBuf, reason: String },

    /// Stored data could not be decoded.
    #[error("Corrupt donation data: {reason}")]
    CorruptData { reason: String },

    /// Repository lock was poisoned.
    #[error("Donation repository lock error")]
    RepositoryLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DonationRejected { messages } => {
                let mut out: Vec<String> = messages.iter().map(|m| format!("• {m}")).collect();
                out.push("Fix the fields above and submit again".into());
                out
            }
            Self::RepositoryError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CorruptData { .. } => vec![
                "The donation data file could not be parsed".into(),
                "Restore it from a backup or point storage.data_file elsewhere".into(),
            ],
            Self::RepositoryLockError => vec![
                "The donation store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DonationRejected { .. } => ErrorCategory::Validation,
            Self::RepositoryError { .. } | Self::CorruptData { .. } => ErrorCategory::Internal,
            Self::RepositoryLockError => ErrorCategory::Internal,
        }
    }
}
