//! Infrastructure adapters for Vaquinha.
//!
//! This crate implements the ports defined in `vaquinha-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod repository;

// Re-export commonly used adapters
pub use repository::{InMemoryDonationRepository, JsonFileDonationRepository};
