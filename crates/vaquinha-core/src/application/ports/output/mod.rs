//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `vaquinha-adapters` crate provides implementations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Donation;
use crate::error::VaquinhaResult;

/// An accepted donation as handed to persistence.
///
/// Card data and the billing address are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub display_name: String,
    pub donor_email: String,
    pub amount: Decimal,
    pub anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_message: Option<String>,
}

impl DonationRecord {
    /// Snapshot a donation that has already passed validation.
    pub fn from_donation(donation: &Donation) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            display_name: donation.display_name(),
            donor_email: donation.donor_email().trim().to_owned(),
            amount: donation.amount(),
            anonymous: donation.is_anonymous(),
            support_message: donation.support_message().map(str::to_owned),
        }
    }
}

/// Port for donation persistence.
///
/// Implemented by:
/// - `vaquinha_adapters::InMemoryDonationRepository` (testing, ephemeral runs)
/// - `vaquinha_adapters::JsonFileDonationRepository` (CLI default)
#[cfg_attr(test, mockall::automock)]
pub trait DonationRepository: Send + Sync {
    /// Store an accepted donation.
    fn save(&self, record: DonationRecord) -> VaquinhaResult<()>;

    /// All stored donations, in insertion order.
    fn list(&self) -> VaquinhaResult<Vec<DonationRecord>>;

    /// Number of stored donations.
    fn count(&self) -> VaquinhaResult<usize> {
        Ok(self.list()?.len())
    }
}
