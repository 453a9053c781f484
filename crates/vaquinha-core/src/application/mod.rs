//! Application layer for Vaquinha.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DonationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DonationService, DonorEntry};

pub use ports::{DonationRecord, DonationRepository};

pub use error::ApplicationError;
