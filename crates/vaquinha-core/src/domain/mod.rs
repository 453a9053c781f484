// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Vaquinha.
//!
//! This module contains pure business logic. All persistence and
//! presentation concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Findings are data**: validation failures are messages, not errors
//! - **Value objects**: Address and PaymentMethod are Clone + PartialEq
//!
// Public API - what the world sees
pub mod campaign;
pub mod entities;
pub mod error;
pub mod messages;
pub mod money;
pub mod validation;

// Re-exports for convenience
pub use campaign::CampaignSummary;
pub use entities::{
    Address, CreditCard, Donation, DonationBuilder, PaymentKind, PaymentMethod,
};
pub use error::{DomainError, ErrorCategory};
pub use money::{MAX_DONATION, MIN_DONATION, format_brl, parse_amount};
pub use validation::{DomainValidator, ValidationRule, ValidationRuleSet};
