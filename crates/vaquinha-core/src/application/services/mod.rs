//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "submit a donation" or "show campaign totals".

pub mod donation_service;

pub use donation_service::{DonationService, DonorEntry};
