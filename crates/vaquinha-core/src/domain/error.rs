// ============================================================================
// domain/error.rs - DOMAIN CONSTRUCTION FAILURES
// ============================================================================
//
// Validation *findings* (a missing name, an out-of-range amount) are data
// carried in `Donation::error_messages`, never a `DomainError`. This enum only
// covers inputs that cannot be turned into domain values at all.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("Unknown payment method '{0}'")]
    UnknownPaymentMethod(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAmount { input, .. } => vec![
                format!("Could not read '{}' as an amount", input),
                "Use digits with a comma or dot for cents, e.g. 50,00 or 50.00".into(),
            ],
            Self::UnknownPaymentMethod(kind) => vec![
                format!("'{}' is not an accepted payment method", kind),
                "Accepted: credit-card".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAmount { .. } => ErrorCategory::Validation,
            Self::UnknownPaymentMethod(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
