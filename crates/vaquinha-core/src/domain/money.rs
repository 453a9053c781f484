//! Brazilian-real amounts: display formatting and form-input parsing.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::error::DomainError;

/// Smallest accepted donation, inclusive.
pub const MIN_DONATION: Decimal = Decimal::from_parts(500, 0, 0, false, 2);
/// Largest accepted donation, inclusive.
pub const MAX_DONATION: Decimal = Decimal::from_parts(450_000, 0, 0, false, 2);

/// Render an amount as a pt-BR currency string, e.g. `R$ 4.500,00`.
///
/// Rounds half away from zero to two places. Negative values are prefixed
/// with `-` (`-R$ 10,20`).
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {},{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Parse an amount typed into the donation form.
///
/// Accepts an optional `R$` prefix. When a comma is present it is the
/// decimal separator and dots are thousands separators (`1.234,56`);
/// otherwise a dot is the decimal separator (`1234.56`).
pub fn parse_amount(input: &str) -> Result<Decimal, DomainError> {
    let trimmed = input.trim();
    let without_symbol = trimmed.strip_prefix("R$").unwrap_or(trimmed);
    let compact: String = without_symbol.chars().filter(|c| !c.is_whitespace()).collect();

    if compact.is_empty() {
        return Err(DomainError::InvalidAmount {
            input: input.to_owned(),
            reason: "no value given".into(),
        });
    }

    let normalized = if compact.contains(',') {
        compact.replace('.', "").replace(',', ".")
    } else {
        compact
    };

    Decimal::from_str(&normalized).map_err(|e| DomainError::InvalidAmount {
        input: input.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn bounds_match_campaign_limits() {
        assert_eq!(MIN_DONATION, dec!(5.00));
        assert_eq!(MAX_DONATION, dec!(4500.00));
    }

    #[test]
    fn zero_renders_as_zero_currency() {
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn formats_with_thousands_and_two_decimals() {
        assert_eq!(format_brl(dec!(5)), "R$ 5,00");
        assert_eq!(format_brl(dec!(4500)), "R$ 4.500,00");
        assert_eq!(format_brl(dec!(999.9)), "R$ 999,90");
        assert_eq!(format_brl(dec!(1000)), "R$ 1.000,00");
        assert_eq!(format_brl(dec!(1234567.891)), "R$ 1.234.567,89");
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(format_brl(dec!(10.005)), "R$ 10,01");
        assert_eq!(format_brl(dec!(-10.005)), "-R$ 10,01");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_brl(dec!(-10.2)), "-R$ 10,20");
        assert_eq!(format_brl(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn parses_brazilian_notation() {
        assert_eq!(parse_amount("1.234,56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("R$ 4.500,00").unwrap(), dec!(4500.00));
        assert_eq!(parse_amount("5,00").unwrap(), dec!(5.00));
    }

    #[test]
    fn parses_dot_decimal_notation() {
        assert_eq!(parse_amount("4500.01").unwrap(), dec!(4500.01));
        assert_eq!(parse_amount("-10.2").unwrap(), dec!(-10.2));
        assert_eq!(parse_amount(" 42 ").unwrap(), dec!(42));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_amount("dez reais"),
            Err(DomainError::InvalidAmount { .. })
        ));
        assert!(parse_amount("   ").is_err());
        assert!(parse_amount("R$").is_err());
    }
}
