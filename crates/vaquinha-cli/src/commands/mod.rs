//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod donate;
pub mod donors;
pub mod init;
pub mod summary;
pub mod validate;

use std::str::FromStr;

use tracing::debug;
use vaquinha_adapters::JsonFileDonationRepository;
use vaquinha_core::application::DonationService;
use vaquinha_core::domain::{Address, CreditCard, Donation, PaymentKind, parse_amount};

use crate::{cli::DonationForm, config::AppConfig, error::CliResult};

/// Service backed by the configured data file.
pub(crate) fn open_service(config: &AppConfig) -> DonationService {
    debug!(path = %config.storage.data_file.display(), "Opening donation store");
    DonationService::new(Box::new(JsonFileDonationRepository::new(
        &config.storage.data_file,
    )))
}

/// Turn the form flags into a [`Donation`] with its attachments.
///
/// Only unparsable input fails here. Missing or out-of-range values are
/// left for validation to report.
pub(crate) fn donation_from_form(form: DonationForm) -> CliResult<Donation> {
    let mut builder = Donation::builder().anonymous(form.anonymous);
    if let Some(name) = form.name {
        builder = builder.donor_name(name);
    }
    if let Some(email) = form.email {
        builder = builder.donor_email(email);
    }
    if let Some(raw) = form.amount.as_deref() {
        builder = builder.amount(parse_amount(raw)?);
    }
    if let Some(message) = form.message {
        builder = builder.support_message(message);
    }
    let mut donation = builder.build();

    if !form.address.is_empty() {
        let a = form.address;
        let mut address = Address::new(
            a.street.unwrap_or_default(),
            a.number.unwrap_or_default(),
            a.city.unwrap_or_default(),
            a.state.unwrap_or_default(),
            a.postal_code.unwrap_or_default(),
        );
        if let Some(complement) = a.complement {
            address = address.with_complement(complement);
        }
        if let Some(phone) = a.phone {
            address = address.with_phone(phone);
        }
        donation.attach_billing_address(address);
    }

    if !form.payment.is_empty() {
        let p = form.payment;
        let kind = match p.kind.as_deref() {
            Some(raw) => PaymentKind::from_str(raw)?,
            None => PaymentKind::CreditCard,
        };
        match kind {
            PaymentKind::CreditCard => donation.attach_payment_method(CreditCard::new(
                p.holder.unwrap_or_default(),
                p.number.unwrap_or_default(),
                p.expiry.unwrap_or_default(),
                p.cvv.unwrap_or_default(),
            )),
        }
    }

    Ok(donation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AddressForm, PaymentForm};
    use crate::error::CliError;
    use rust_decimal::Decimal;

    fn filled_form() -> DonationForm {
        DonationForm {
            name: Some("Maria".into()),
            email: Some("maria@example.com".into()),
            amount: Some("R$ 1.234,56".into()),
            anonymous: false,
            message: Some("Boa sorte!".into()),
            address: AddressForm {
                street: Some("Rua A".into()),
                number: Some("1".into()),
                city: Some("Recife".into()),
                state: Some("PE".into()),
                postal_code: Some("50000-000".into()),
                ..AddressForm::default()
            },
            payment: PaymentForm {
                kind: Some("cartao".into()),
                holder: Some("MARIA".into()),
                number: Some("4111111111111111".into()),
                expiry: Some("01/31".into()),
                cvv: Some("999".into()),
            },
        }
    }

    #[test]
    fn filled_form_builds_attached_donation() {
        let mut d = donation_from_form(filled_form()).unwrap();
        assert_eq!(d.amount(), Decimal::new(123_456, 2));
        assert_eq!(d.support_message(), Some("Boa sorte!"));
        assert!(d.billing_address().is_some());
        assert!(d.payment_method().is_some());
        assert!(d.is_valid());
    }

    #[test]
    fn empty_form_builds_bare_donation() {
        let d = donation_from_form(DonationForm::default()).unwrap();
        assert_eq!(d.amount(), Decimal::ZERO);
        assert!(d.billing_address().is_none());
        assert!(d.payment_method().is_none());
    }

    #[test]
    fn unparsable_amount_fails_early() {
        let form = DonationForm {
            amount: Some("cinquenta".into()),
            ..DonationForm::default()
        };
        assert!(matches!(donation_from_form(form), Err(CliError::Core(_))));
    }

    #[test]
    fn unknown_payment_kind_fails_early() {
        let form = DonationForm {
            payment: PaymentForm {
                kind: Some("pix".into()),
                ..PaymentForm::default()
            },
            ..DonationForm::default()
        };
        let err = donation_from_form(form).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
