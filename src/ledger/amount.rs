//! Parsing and display helpers for money values typed by the user.

use crate::errors::{LedgerError, Result};

/// Parses free-form text into an amount. Surrounding whitespace is ignored;
/// anything that is not a finite number is rejected.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LedgerError::InvalidAmount(trimmed.to_string())),
    }
}

/// Formats an amount the way balances and history rows are shown: `12.50,- CZK`.
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{:.2},- {}", value, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount(" 7.5 ").unwrap(), 7.5);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        for input in ["abc", "", "12,5", "NaN", "inf"] {
            assert!(
                matches!(parse_amount(input), Err(LedgerError::InvalidAmount(_))),
                "expected `{input}` to be rejected"
            );
        }
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_amount(83.0, "CZK"), "83.00,- CZK");
        assert_eq!(format_amount(-2.5, "EUR"), "-2.50,- EUR");
    }
}
