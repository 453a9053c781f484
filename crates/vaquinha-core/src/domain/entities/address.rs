use once_cell::sync::Lazy;

use crate::domain::{
    messages,
    validation::{ValidationRuleSet, is_blank},
};

static ADDRESS_RULES: Lazy<ValidationRuleSet<Address>> = Lazy::new(|| {
    ValidationRuleSet::new()
        .with_rule("street_required", messages::STREET_REQUIRED, |a: &Address| {
            is_blank(&a.street)
        })
        .with_rule("number_required", messages::NUMBER_REQUIRED, |a: &Address| {
            is_blank(&a.number)
        })
        .with_rule("city_required", messages::CITY_REQUIRED, |a: &Address| {
            is_blank(&a.city)
        })
        .with_rule("state_required", messages::STATE_REQUIRED, |a: &Address| {
            is_blank(&a.state)
        })
        .with_rule("state_length", messages::STATE_LENGTH, |a: &Address| {
            !is_blank(&a.state) && a.state.trim().chars().count() != 2
        })
        .with_rule("postal_code_required", messages::POSTAL_CODE_REQUIRED, |a: &Address| {
            is_blank(&a.postal_code)
        })
        .with_rule("postal_code_format", messages::POSTAL_CODE_INVALID, |a: &Address| {
            !is_blank(&a.postal_code) && !is_postal_code(&a.postal_code)
        })
});

/// Billing address attached to a donation.
///
/// A [`Donation`](super::Donation) only cares whether one is attached; the
/// field rules below run when a caller asks the address itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    number: String,
    complement: Option<String>,
    city: String,
    state: String,
    postal_code: String,
    phone: Option<String>,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            complement: None,
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            phone: None,
        }
    }

    pub fn with_complement(mut self, complement: impl Into<String>) -> Self {
        self.complement = Some(complement.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Messages for every field rule this address breaks.
    pub fn validate(&self) -> Vec<String> {
        ADDRESS_RULES.evaluate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn street(&self) -> &str {
        &self.street
    }
    pub fn number(&self) -> &str {
        &self.number
    }
    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }
    pub fn city(&self) -> &str {
        &self.city
    }
    pub fn state(&self) -> &str {
        &self.state
    }
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// CEP: eight digits, optionally written `NNNNN-NNN`.
fn is_postal_code(value: &str) -> bool {
    let value = value.trim();
    let digits: String = match value.split_once('-') {
        Some((head, tail)) if head.len() == 5 && tail.len() == 3 => format!("{head}{tail}"),
        Some(_) => return false,
        None => value.to_owned(),
    };
    digits.len() == 8 && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Address {
        Address::new("Rua das Flores", "100", "São Paulo", "SP", "01234-567")
    }

    #[test]
    fn complete_address_is_valid() {
        assert!(valid().is_valid());
        assert!(valid().with_phone("11 99999-0000").is_valid());
    }

    #[test]
    fn empty_address_reports_each_required_field() {
        let msgs = Address::new("", "", "", "", "").validate();
        assert_eq!(msgs.len(), 5);
        assert!(msgs.contains(&messages::STREET_REQUIRED.to_string()));
        assert!(msgs.contains(&messages::NUMBER_REQUIRED.to_string()));
        assert!(msgs.contains(&messages::CITY_REQUIRED.to_string()));
        assert!(msgs.contains(&messages::STATE_REQUIRED.to_string()));
        assert!(msgs.contains(&messages::POSTAL_CODE_REQUIRED.to_string()));
    }

    #[test]
    fn state_must_be_two_letters() {
        let addr = Address::new("Rua A", "1", "Recife", "Pernambuco", "50000000");
        assert_eq!(addr.validate(), vec![messages::STATE_LENGTH]);
    }

    #[test]
    fn postal_code_shapes() {
        assert!(is_postal_code("01234-567"));
        assert!(is_postal_code("01234567"));
        assert!(!is_postal_code("0123-4567"));
        assert!(!is_postal_code("1234567"));
        assert!(!is_postal_code("abcde-fgh"));
    }

    #[test]
    fn malformed_postal_code_reports_only_format() {
        let addr = Address::new("Rua A", "1", "Recife", "PE", "12-34");
        assert_eq!(addr.validate(), vec![messages::POSTAL_CODE_INVALID]);
    }
}
