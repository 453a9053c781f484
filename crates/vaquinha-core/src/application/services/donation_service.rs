//! Donation Service - main application orchestrator.
//!
//! This service coordinates the donation workflow:
//! 1. Validate the donation aggregate
//! 2. Check the attached billing address and payment method
//! 3. Persist the accepted donation
//!
//! It also answers the read-side questions the campaign pages ask: totals
//! against the goal and the public donor list.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DonationRecord, DonationRepository},
    },
    domain::{CampaignSummary, Donation, DomainValidator as validator, format_brl, messages},
    error::VaquinhaResult,
};

/// One line of the public donor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonorEntry {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub message: Option<String>,
}

/// Main donation service.
pub struct DonationService {
    repository: Box<dyn DonationRepository>,
}

impl DonationService {
    /// Create a new donation service with the given repository.
    pub fn new(repository: Box<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    /// Run every check a submission must pass, without persisting.
    ///
    /// Donation rules come first, then presence of the attachments, then the
    /// attachments' own field rules. An empty result means the donation can
    /// be accepted.
    pub fn check(&self, donation: &mut Donation) -> Vec<String> {
        let mut findings = validator::check_donation(donation);

        match donation.billing_address() {
            Some(address) => findings.extend(validator::check_address(address)),
            None => findings.push(messages::BILLING_ADDRESS_MISSING.to_owned()),
        }

        match donation.payment_method() {
            Some(method) => findings.extend(validator::check_payment_method(method)),
            None => findings.push(messages::PAYMENT_METHOD_MISSING.to_owned()),
        }

        findings
    }

    /// Validate and record a donation.
    #[instrument(
        skip_all,
        fields(amount = %donation.amount(), anonymous = donation.is_anonymous())
    )]
    pub fn submit(&self, mut donation: Donation) -> VaquinhaResult<DonationRecord> {
        let findings = self.check(&mut donation);
        if !findings.is_empty() {
            warn!(count = findings.len(), "Donation rejected");
            return Err(ApplicationError::DonationRejected { messages: findings }.into());
        }

        let record = DonationRecord::from_donation(&donation);
        self.repository.save(record.clone())?;

        info!(id = %record.id, "Donation recorded");
        Ok(record)
    }

    /// Campaign totals against `goal`.
    #[instrument(skip(self))]
    pub fn summary(&self, goal: Decimal) -> VaquinhaResult<CampaignSummary> {
        let records = self.repository.list()?;
        debug!(count = records.len(), "Computing campaign summary");
        Ok(CampaignSummary::compute(
            goal,
            records.iter().map(|r| r.amount),
        ))
    }

    /// Public donor list, most recent first.
    pub fn donors(&self) -> VaquinhaResult<Vec<DonorEntry>> {
        let mut records = self.repository.list()?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(records
            .into_iter()
            .map(|r| DonorEntry {
                name: r.display_name,
                amount: format_brl(r.amount),
                date: r.created_at.format("%d/%m/%Y").to_string(),
                message: r.support_message,
            })
            .collect())
    }

    /// Number of recorded donations.
    pub fn donation_count(&self) -> VaquinhaResult<usize> {
        self.repository.count()
    }
}
