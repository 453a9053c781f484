//! The donation aggregate.
//!
//! A [`Donation`] gathers what the donor typed into the form, accepts an
//! [`Address`] and a [`PaymentMethod`] through two explicit attachment calls,
//! and answers [`Donation::is_valid`]. Validation is a pure recomputation over
//! the current fields: every call replaces the error list, so messages never
//! pile up across calls.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::domain::{
    entities::{Address, PaymentMethod},
    messages,
    money::{MAX_DONATION, MIN_DONATION},
    validation::{ValidationRuleSet, is_above, is_below, is_blank, is_well_formed_email},
};

static DONATION_RULES: Lazy<ValidationRuleSet<Donation>> = Lazy::new(|| {
    ValidationRuleSet::new()
        .with_rule("name_required", messages::NAME_REQUIRED, |d: &Donation| {
            !d.anonymous && is_blank(&d.donor_name)
        })
        .with_rule("email_required", messages::EMAIL_REQUIRED, |d: &Donation| {
            is_blank(&d.donor_email)
        })
        .with_rule("email_format", messages::EMAIL_INVALID, |d: &Donation| {
            !is_blank(&d.donor_email) && !is_well_formed_email(&d.donor_email)
        })
        .with_rule("amount_minimum", messages::AMOUNT_BELOW_MINIMUM, |d: &Donation| {
            is_below(d.amount, MIN_DONATION)
        })
        .with_rule("amount_maximum", messages::AMOUNT_ABOVE_MAXIMUM, |d: &Donation| {
            is_above(d.amount, MAX_DONATION)
        })
});

/// A donor's submission, validated as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    donor_name: String,
    donor_email: String,
    amount: Decimal,
    anonymous: bool,
    support_message: Option<String>,
    billing_address: Option<Address>,
    payment_method: Option<PaymentMethod>,
    error_messages: Vec<String>,
}

impl Donation {
    pub fn new(
        donor_name: impl Into<String>,
        donor_email: impl Into<String>,
        amount: Decimal,
        anonymous: bool,
    ) -> Self {
        Self {
            donor_name: donor_name.into(),
            donor_email: donor_email.into(),
            amount,
            anonymous,
            support_message: None,
            billing_address: None,
            payment_method: None,
            error_messages: Vec::new(),
        }
    }

    /// Start a builder for form input where any field may be missing.
    pub fn builder() -> DonationBuilder {
        DonationBuilder::default()
    }

    /// The rules `is_valid` runs, in evaluation order.
    pub fn rules() -> &'static ValidationRuleSet<Donation> {
        &*DONATION_RULES
    }

    pub fn attach_billing_address(&mut self, address: Address) {
        self.billing_address = Some(address);
    }

    pub fn attach_payment_method(&mut self, method: impl Into<PaymentMethod>) {
        self.payment_method = Some(method.into());
    }

    /// Run every donation rule and rebuild [`Self::error_messages`].
    ///
    /// Returns `true` iff no rule failed. Attached address and payment
    /// method are not inspected.
    pub fn is_valid(&mut self) -> bool {
        self.error_messages = DONATION_RULES.evaluate(self);
        self.error_messages.is_empty()
    }

    /// Messages from the most recent [`Self::is_valid`] call.
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn donor_name(&self) -> &str {
        &self.donor_name
    }

    pub fn donor_email(&self) -> &str {
        &self.donor_email
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn support_message(&self) -> Option<&str> {
        self.support_message.as_deref()
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref()
    }

    pub fn payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_method.as_ref()
    }

    /// Name for the public donor list.
    pub fn display_name(&self) -> String {
        if self.anonymous || is_blank(&self.donor_name) {
            messages::ANONYMOUS_DONOR.to_owned()
        } else {
            self.donor_name.trim().to_owned()
        }
    }
}

/// Builds a [`Donation`] from optional form fields.
///
/// Missing text fields become empty and a missing amount becomes zero, so
/// the resulting donation reports them through its normal rules.
#[derive(Debug, Default, Clone)]
pub struct DonationBuilder {
    donor_name: Option<String>,
    donor_email: Option<String>,
    amount: Option<Decimal>,
    anonymous: bool,
    support_message: Option<String>,
}

impl DonationBuilder {
    pub fn donor_name(mut self, name: impl Into<String>) -> Self {
        self.donor_name = Some(name.into());
        self
    }

    pub fn donor_email(mut self, email: impl Into<String>) -> Self {
        self.donor_email = Some(email.into());
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    pub fn support_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.support_message = (!is_blank(&message)).then_some(message);
        self
    }

    pub fn build(self) -> Donation {
        let mut donation = Donation::new(
            self.donor_name.unwrap_or_default(),
            self.donor_email.unwrap_or_default(),
            self.amount.unwrap_or(Decimal::ZERO),
            self.anonymous,
        );
        donation.support_message = self.support_message;
        donation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CreditCard;
    use rust_decimal_macros::dec;

    fn attach_valid_collaborators(donation: &mut Donation) {
        donation.attach_billing_address(Address::new(
            "Rua das Flores",
            "100",
            "São Paulo",
            "SP",
            "01234-567",
        ));
        donation.attach_payment_method(CreditCard::new(
            "MARIA SILVA",
            "4111 1111 1111 1111",
            "12/30",
            "123",
        ));
    }

    fn donation_with_amount(amount: Decimal) -> Donation {
        let mut d = Donation::new("Maria Silva", "maria@example.com", amount, false);
        attach_valid_collaborators(&mut d);
        d
    }

    #[test]
    fn rule_set_has_five_rules_in_order() {
        let names: Vec<_> = Donation::rules().rules().map(|r| r.name()).collect();
        assert_eq!(
            names,
            [
                "name_required",
                "email_required",
                "email_format",
                "amount_minimum",
                "amount_maximum"
            ]
        );
    }

    #[test]
    fn well_formed_donation_is_valid() {
        let mut d = donation_with_amount(dec!(50.00));
        assert!(d.is_valid());
        assert!(d.error_messages().is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(donation_with_amount(dec!(5.00)).is_valid());
        assert!(donation_with_amount(dec!(4500.00)).is_valid());
    }

    #[test]
    fn just_outside_bounds_fails() {
        let mut low = donation_with_amount(dec!(4.99));
        assert!(!low.is_valid());
        assert_eq!(low.error_messages(), [messages::AMOUNT_BELOW_MINIMUM]);

        let mut high = donation_with_amount(dec!(4500.01));
        assert!(!high.is_valid());
        assert_eq!(high.error_messages(), [messages::AMOUNT_ABOVE_MAXIMUM]);
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut d = Donation::new("   ", "maria@example.com", dec!(10), false);
        assert!(!d.is_valid());
        assert_eq!(d.error_messages(), [messages::NAME_REQUIRED]);
    }

    #[test]
    fn anonymous_only_waives_the_name() {
        let mut d = Donation::new("", "not-an-email", dec!(1), true);
        assert!(!d.is_valid());
        assert_eq!(
            d.error_messages(),
            [messages::EMAIL_INVALID, messages::AMOUNT_BELOW_MINIMUM]
        );
    }

    #[test]
    fn email_rules_are_mutually_exclusive() {
        let mut empty = Donation::new("Maria", "", dec!(10), false);
        empty.is_valid();
        assert_eq!(empty.error_messages(), [messages::EMAIL_REQUIRED]);

        let mut malformed = Donation::new("Maria", "maria@", dec!(10), false);
        malformed.is_valid();
        assert_eq!(malformed.error_messages(), [messages::EMAIL_INVALID]);
    }

    #[test]
    fn errors_are_replaced_not_accumulated() {
        let mut d = Donation::new("", "", Decimal::ZERO, false);
        assert!(!d.is_valid());
        assert_eq!(d.error_messages().len(), 3);
        assert!(!d.is_valid());
        assert_eq!(d.error_messages().len(), 3);
    }

    #[test]
    fn missing_collaborators_do_not_affect_validity() {
        let mut d = Donation::new("Maria", "maria@example.com", dec!(20), false);
        assert!(d.billing_address().is_none());
        assert!(d.payment_method().is_none());
        assert!(d.is_valid());
    }

    #[test]
    fn attachment_does_not_validate_collaborators() {
        let mut d = Donation::new("Maria", "maria@example.com", dec!(20), false);
        d.attach_billing_address(Address::new("", "", "", "", ""));
        d.attach_payment_method(CreditCard::new("", "", "", ""));
        assert!(d.is_valid());
        assert!(d.billing_address().is_some());
    }

    #[test]
    fn builder_defaults_missing_fields() {
        let mut d = Donation::builder().anonymous(true).build();
        assert_eq!(d.donor_name(), "");
        assert_eq!(d.amount(), Decimal::ZERO);
        assert!(!d.is_valid());
        assert_eq!(d.error_messages().len(), 2);
    }

    #[test]
    fn builder_drops_blank_support_message() {
        let d = Donation::builder().support_message("  ").build();
        assert_eq!(d.support_message(), None);
        let d = Donation::builder().support_message("Força!").build();
        assert_eq!(d.support_message(), Some("Força!"));
    }

    #[test]
    fn display_name_hides_anonymous_donors() {
        let named = Donation::new("  Maria Silva ", "m@example.com", dec!(10), false);
        assert_eq!(named.display_name(), "Maria Silva");
        let anon = Donation::new("Maria Silva", "m@example.com", dec!(10), true);
        assert_eq!(anon.display_name(), messages::ANONYMOUS_DONOR);
    }
}
