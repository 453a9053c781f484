use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::domain::{
    error::DomainError,
    messages,
    validation::{ValidationRuleSet, is_blank},
};

static CARD_RULES: Lazy<ValidationRuleSet<CreditCard>> = Lazy::new(|| {
    ValidationRuleSet::new()
        .with_rule("holder_required", messages::HOLDER_NAME_REQUIRED, |c: &CreditCard| {
            is_blank(&c.holder_name)
        })
        .with_rule("number_required", messages::CARD_NUMBER_REQUIRED, |c: &CreditCard| {
            is_blank(&c.number)
        })
        .with_rule("number_format", messages::CARD_NUMBER_INVALID, |c: &CreditCard| {
            !is_blank(&c.number) && !is_card_number(&c.number)
        })
        .with_rule("expiry_format", messages::EXPIRY_INVALID, |c: &CreditCard| {
            parse_expiry(&c.expiry).is_none()
        })
        .with_rule("cvv_format", messages::CVV_INVALID, |c: &CreditCard| {
            let cvv = c.cvv.trim();
            !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|ch| ch.is_ascii_digit())
        })
});

/// How the donor pays. Credit card is the only channel the campaign accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard(CreditCard),
}

impl PaymentMethod {
    pub fn kind(&self) -> PaymentKind {
        match self {
            Self::CreditCard(_) => PaymentKind::CreditCard,
        }
    }

    /// Run the method's own field rules.
    pub fn validate(&self) -> Vec<String> {
        match self {
            Self::CreditCard(card) => card.validate(),
        }
    }
}

impl From<CreditCard> for PaymentMethod {
    fn from(card: CreditCard) -> Self {
        Self::CreditCard(card)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentKind {
    CreditCard,
}

impl PaymentKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "credit-card" | "creditcard" | "card" | "cartao" => Ok(Self::CreditCard),
            other => Err(DomainError::UnknownPaymentMethod(other.to_owned())),
        }
    }
}

/// Credit card credentials as typed into the form.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCard {
    holder_name: String,
    number: String,
    expiry: String,
    cvv: String,
}

impl CreditCard {
    pub fn new(
        holder_name: impl Into<String>,
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            number: number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        CARD_RULES.evaluate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// `(month, two-digit year)` when the expiry reads as `MM/YY`.
    pub fn expiry(&self) -> Option<(u8, u8)> {
        parse_expiry(&self.expiry)
    }

    /// Card number with everything but the last four digits hidden.
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let visible = digits.len().min(4);
        let hidden = digits.len() - visible;
        let tail: String = digits[hidden..].iter().collect();
        format!("{}{}", "*".repeat(hidden), tail)
    }
}

// Never print the full number or CVV.
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("holder_name", &self.holder_name)
            .field("number", &self.masked_number())
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}

/// 13 to 19 digits (spaces and hyphens allowed) passing the Luhn checksum.
fn is_card_number(value: &str) -> bool {
    let mut digits = Vec::with_capacity(19);
    for ch in value.chars() {
        match ch {
            '0'..='9' => digits.push(ch as u32 - '0' as u32),
            ' ' | '-' => {}
            _ => return false,
        }
    }
    (13..=19).contains(&digits.len()) && luhn_checksum_ok(&digits)
}

fn luhn_checksum_ok(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

fn parse_expiry(value: &str) -> Option<(u8, u8)> {
    let (month, year) = value.trim().split_once('/')?;
    if month.len() != 2 || year.len() != 2 {
        return None;
    }
    let month: u8 = month.parse().ok()?;
    let year: u8 = year.parse().ok()?;
    (1..=12).contains(&month).then_some((month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreditCard {
        CreditCard::new("MARIA SILVA", "4111 1111 1111 1111", "12/30", "123")
    }

    #[test]
    fn valid_card_passes() {
        assert!(valid().is_valid());
        assert!(PaymentMethod::from(valid()).validate().is_empty());
    }

    #[test]
    fn luhn_rejects_single_digit_typo() {
        assert!(is_card_number("4111111111111111"));
        assert!(!is_card_number("4111111111111112"));
        assert!(!is_card_number("4111-1111-1111-111x"));
        assert!(!is_card_number("411111111111"));
    }

    #[test]
    fn empty_card_reports_required_fields() {
        let msgs = CreditCard::new("", "", "", "").validate();
        assert_eq!(
            msgs,
            vec![
                messages::HOLDER_NAME_REQUIRED,
                messages::CARD_NUMBER_REQUIRED,
                messages::EXPIRY_INVALID,
                messages::CVV_INVALID,
            ]
        );
    }

    #[test]
    fn expiry_requires_month_in_range() {
        assert_eq!(parse_expiry("01/27"), Some((1, 27)));
        assert_eq!(parse_expiry("13/27"), None);
        assert_eq!(parse_expiry("00/27"), None);
        assert_eq!(parse_expiry("1/27"), None);
        assert_eq!(parse_expiry("0127"), None);
    }

    #[test]
    fn cvv_accepts_three_or_four_digits() {
        assert!(CreditCard::new("A", "4111111111111111", "12/30", "1234").is_valid());
        let bad = CreditCard::new("A", "4111111111111111", "12/30", "12a");
        assert_eq!(bad.validate(), vec![messages::CVV_INVALID]);
    }

    #[test]
    fn masked_number_keeps_last_four() {
        assert_eq!(valid().masked_number(), "************1111");
        assert_eq!(CreditCard::new("A", "12", "", "").masked_number(), "12");
    }

    #[test]
    fn debug_output_hides_number() {
        let dbg = format!("{:?}", valid());
        assert!(!dbg.contains("4111 1111"));
        assert!(!dbg.contains("123\""));
    }

    #[test]
    fn payment_kind_parses_aliases() {
        assert_eq!("card".parse::<PaymentKind>().unwrap(), PaymentKind::CreditCard);
        assert_eq!(
            "Credit-Card".parse::<PaymentKind>().unwrap(),
            PaymentKind::CreditCard
        );
        assert!(matches!(
            "boleto".parse::<PaymentKind>(),
            Err(DomainError::UnknownPaymentMethod(_))
        ));
    }
}
