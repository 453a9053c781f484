//! Unified error handling for Vaquinha Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Vaquinha Core operations.
#[derive(Debug, Error, Clone)]
pub enum VaquinhaError {
    /// Errors from the domain layer (unusable input).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl VaquinhaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in Vaquinha".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Validation messages when this error is a rejected donation.
    pub fn rejection_messages(&self) -> Option<&[String]> {
        match self {
            Self::Application(ApplicationError::DonationRejected { messages }) => Some(messages),
            _ => None,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::RepositoryLockError)
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type VaquinhaResult<T> = Result<T, VaquinhaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_exposes_messages() {
        let err: VaquinhaError = ApplicationError::DonationRejected {
            messages: vec!["O campo Email é obrigatório.".into()],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(
            err.rejection_messages(),
            Some(&["O campo Email é obrigatório.".to_string()][..])
        );
        assert!(err.to_string().contains("O campo Email é obrigatório."));
    }

    #[test]
    fn lock_errors_are_retryable() {
        let err = VaquinhaError::from(ApplicationError::RepositoryLockError);
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn unknown_payment_kind_is_a_validation_error() {
        let err = VaquinhaError::from(DomainError::UnknownPaymentMethod("pix".into()));
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("credit-card")));
    }
}
