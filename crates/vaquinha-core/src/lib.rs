//! Vaquinha Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Vaquinha
//! donation campaign, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           vaquinha-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (DonationService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: DonationRepository)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    vaquinha-adapters (Infrastructure)   │
//! │ (InMemoryDonationRepository, JsonFile)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Donation, Address, PaymentMethod, ...) │
//! │            No I/O, no async             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use vaquinha_core::domain::{Address, CreditCard, Donation, PaymentMethod};
//!
//! let mut donation = Donation::new("Maria", "maria@example.com", Decimal::new(5000, 2), false);
//! donation.attach_billing_address(Address::new(
//!     "Rua das Flores", "100", "São Paulo", "SP", "01234-567",
//! ));
//! donation.attach_payment_method(PaymentMethod::CreditCard(CreditCard::new(
//!     "MARIA SILVA", "4111 1111 1111 1111", "12/30", "123",
//! )));
//!
//! assert!(donation.is_valid());
//! assert!(donation.error_messages().is_empty());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DonationService, DonorEntry,
        ports::{DonationRecord, DonationRepository},
    };
    pub use crate::domain::{
        Address, CampaignSummary, CreditCard, Donation, DonationBuilder, PaymentMethod,
        ValidationRule, ValidationRuleSet, format_brl,
    };
    pub use crate::error::{VaquinhaError, VaquinhaResult};
}

