//! Rule-set validation shared by every domain type.
//!
//! A rule is a predicate that reports a *violation* paired with the exact
//! message shown to the donor. A [`ValidationRuleSet`] evaluates all of its
//! rules independently and collects one message per violated rule; nothing
//! short-circuits.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::domain::entities::{Address, Donation, PaymentMethod};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A single predicate/message pair.
pub struct ValidationRule<T> {
    name: &'static str,
    message: &'static str,
    violated: fn(&T) -> bool,
}

impl<T> ValidationRule<T> {
    pub const fn new(name: &'static str, message: &'static str, violated: fn(&T) -> bool) -> Self {
        Self {
            name,
            message,
            violated,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// `true` when `subject` breaks this rule.
    pub fn is_violated_by(&self, subject: &T) -> bool {
        (self.violated)(subject)
    }
}

impl<T> fmt::Debug for ValidationRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

/// Ordered, closed collection of rules over one subject type.
#[derive(Debug)]
pub struct ValidationRuleSet<T> {
    rules: Vec<ValidationRule<T>>,
}

impl<T> ValidationRuleSet<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; evaluation order follows insertion order.
    pub fn with_rule(
        mut self,
        name: &'static str,
        message: &'static str,
        violated: fn(&T) -> bool,
    ) -> Self {
        self.rules.push(ValidationRule::new(name, message, violated));
        self
    }

    /// Run every rule against `subject` and return the messages of the ones
    /// that failed. Passing rules contribute nothing.
    pub fn evaluate(&self, subject: &T) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| rule.is_violated_by(subject))
            .map(|rule| rule.message.to_owned())
            .collect()
    }

    pub fn rules(&self) -> impl Iterator<Item = &ValidationRule<T>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> Default for ValidationRuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Shared helpers ───────────────────────────────────────────────────────────

/// Empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Standard `local@domain.tld` shape check. Surrounding whitespace is ignored.
pub fn is_well_formed_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

pub fn is_below(value: Decimal, minimum: Decimal) -> bool {
    value < minimum
}

pub fn is_above(value: Decimal, maximum: Decimal) -> bool {
    value > maximum
}

/// Centralized entry points for domain validation.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a donation, returning its freshly computed messages.
    pub fn check_donation(donation: &mut Donation) -> Vec<String> {
        donation.is_valid();
        donation.error_messages().to_vec()
    }

    pub fn check_address(address: &Address) -> Vec<String> {
        address.validate()
    }

    pub fn check_payment_method(method: &PaymentMethod) -> Vec<String> {
        method.validate()
    }
}
