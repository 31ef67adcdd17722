//! # Amount Formatting
//!
//! Conversions between human-readable decimal strings and raw integer token
//! amounts, plus thousands-grouped display helpers.
//!
//! Raw amounts are never routed through floating point. Unit scaling is done
//! by `alloy_primitives::utils`; this module adds input checks, display
//! truncation and thousands grouping on top.
//!
//! ## Functions
//!
//! - [`format_currency`] - Format a float with comma separators and fixed decimals
//! - [`format_token_amount`] - Format a raw amount for display, truncating extra digits
//! - [`format_units`] - Full-precision decimal string of a raw amount
//! - [`parse_units`] - Parse a decimal string into a raw amount

use alloy_primitives::utils::{ParseUnits, Unit};

/// Format a number with commas (e.g., 1234567.891 -> "1,234,567.89")
///
/// Non-finite input is rendered as zero.
///
/// # Examples
///
/// ```rust
/// use lib_utils::format::format_currency;
///
/// assert_eq!(format_currency(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_currency(100.0, 2), "100.00");
/// ```
pub fn format_currency(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.prec$}", value, prec = decimals);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if decimal_part.is_empty() {
        format!("{}{}", sign, group_thousands(integer_part))
    } else {
        format!("{}{}.{}", sign, group_thousands(integer_part), decimal_part)
    }
}

/// Format a raw token amount with `display_decimals` fractional digits.
///
/// Extra fractional digits are truncated, never rounded.
///
/// # Examples
///
/// ```rust
/// use lib_utils::format::format_token_amount;
///
/// assert_eq!(format_token_amount(1_234_567_891, 6, 2), "1,234.56");
/// assert_eq!(format_token_amount(0, 6, 2), "0.00");
/// ```
pub fn format_token_amount(raw: u128, decimals: u8, display_decimals: usize) -> String {
    let full = to_decimal_string(raw, decimals);
    let (integer_part, fraction_part) = full.split_once('.').unwrap_or((full.as_str(), ""));
    let shown = display_decimals.min(fraction_part.len());
    let fraction = &fraction_part[..shown];

    if display_decimals == 0 {
        group_thousands(integer_part)
    } else if fraction.is_empty() {
        format!("{}.{}", group_thousands(integer_part), "0".repeat(display_decimals))
    } else {
        format!("{}.{}", group_thousands(integer_part), fraction)
    }
}

/// Full-precision decimal string of a raw amount, trailing zeros removed.
///
/// Always keeps at least one fractional digit (`1_000_000` at 6 decimals is `"1.0"`).
pub fn format_units(raw: u128, decimals: u8) -> String {
    let full = to_decimal_string(raw, decimals);
    let (integer_part, fraction_part) = full.split_once('.').unwrap_or((full.as_str(), ""));
    let trimmed = fraction_part.trim_end_matches('0');
    if trimmed.is_empty() {
        format!("{}.0", integer_part)
    } else {
        format!("{}.{}", integer_part, trimmed)
    }
}

/// Parse a decimal string (`"12.5"`, `".5"`, `"7"`) into a raw integer amount.
///
/// # Errors
///
/// - [`AmountError::Empty`] for blank input
/// - [`AmountError::Invalid`] for anything other than digits and one `.`
/// - [`AmountError::TooPrecise`] when there are more fractional digits than `decimals`
/// - [`AmountError::Overflow`] when the raw value does not fit in `u128`
pub fn parse_units(amount: &str, decimals: u8) -> Result<u128, AmountError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(AmountError::Empty);
    }

    // alloy accepts a sign and truncates extra digits; neither is a valid amount here
    let (integer_part, fraction_part) = amount.split_once('.').unwrap_or((amount, ""));
    if integer_part.is_empty() && fraction_part.is_empty() {
        return Err(AmountError::Invalid(amount.to_string()));
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(integer_part) || !all_digits(fraction_part) {
        return Err(AmountError::Invalid(amount.to_string()));
    }
    let unit = unit(decimals);
    if fraction_part.len() > unit.get() as usize {
        return Err(AmountError::TooPrecise { decimals });
    }

    let parsed = ParseUnits::parse_units(amount, unit).map_err(|_| AmountError::Overflow)?;
    u128::try_from(parsed.get_absolute()).map_err(|_| AmountError::Overflow)
}

/// Decimal string with exactly `decimals` fractional digits (none when `decimals` is 0).
fn to_decimal_string(raw: u128, decimals: u8) -> String {
    ParseUnits::from(raw).format_units(unit(decimals))
}

/// Token precision as an alloy unit, capped at the 77 decimals a `U256` can scale by.
fn unit(decimals: u8) -> Unit {
    Unit::new(decimals).unwrap_or(Unit::MAX)
}

fn group_thousands(integer_part: &str) -> String {
    let mut result = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    Empty,
    Invalid(String),
    TooPrecise { decimals: u8 },
    Overflow,
}

impl std::fmt::Display for AmountError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AmountError::Empty => write!(fmt, "amount is empty"),
            AmountError::Invalid(value) => write!(fmt, "'{value}' is not a valid amount"),
            AmountError::TooPrecise { decimals } => {
                write!(fmt, "amount has more than {decimals} decimal places")
            }
            AmountError::Overflow => write!(fmt, "amount is too large"),
        }
    }
}

impl std::error::Error for AmountError {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_currency(999.0, 2), "999.00");
        assert_eq!(format_currency(1000.0, 0), "1,000");
        assert_eq!(format_currency(-1234.5, 1), "-1,234.5");
        assert_eq!(format_currency(f64::NAN, 2), "0.00");
    }

    #[test]
    fn test_format_token_amount_truncates() {
        // 1.999999 must not round up to 2.00
        assert_eq!(format_token_amount(1_999_999, 6, 2), "1.99");
        assert_eq!(format_token_amount(1_234_567_000_000, 6, 2), "1,234,567.00");
        assert_eq!(format_token_amount(5, 6, 6), "0.000005");
        assert_eq!(format_token_amount(0, 6, 0), "0");
    }

    #[test]
    fn test_format_token_amount_large_values() {
        let raw = u128::MAX;
        let shown = format_token_amount(raw, 6, 6);
        assert!(shown.ends_with(".211455"));
        assert!(shown.starts_with("340,282,366,920,938"));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(1_000_000, 6), "1.0");
        assert_eq!(format_units(1_500_000, 6), "1.5");
        assert_eq!(format_units(1, 6), "0.000001");
        assert_eq!(format_units(0, 6), "0.0");
    }

    #[test]
    fn test_whole_unit_tokens() {
        assert_eq!(format_units(42, 0), "42.0");
        assert_eq!(format_token_amount(1_234, 0, 2), "1,234.00");
        assert_eq!(parse_units("42", 0), Ok(42));
        assert_eq!(parse_units("4.2", 0), Err(AmountError::TooPrecise { decimals: 0 }));
    }

    #[test]
    fn test_eighteen_decimals() {
        let raw = parse_units("1.5", 18).unwrap();
        assert_eq!(raw, 1_500_000_000_000_000_000);
        assert_eq!(format_units(raw, 18), "1.5");
        assert_eq!(format_token_amount(raw, 18, 2), "1.50");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("50", 6), Ok(50_000_000));
        assert_eq!(parse_units("0.5", 6), Ok(500_000));
        assert_eq!(parse_units(".5", 6), Ok(500_000));
        assert_eq!(parse_units("5.", 6), Ok(5_000_000));
        assert_eq!(parse_units(" 12.345678 ", 6), Ok(12_345_678));
        assert_eq!(parse_units("0", 6), Ok(0));
    }

    #[test]
    fn test_parse_units_rejects() {
        assert_eq!(parse_units("", 6), Err(AmountError::Empty));
        assert_eq!(parse_units(".", 6), Err(AmountError::Invalid(".".to_string())));
        assert_eq!(parse_units("1,000", 6), Err(AmountError::Invalid("1,000".to_string())));
        assert_eq!(parse_units("-1", 6), Err(AmountError::Invalid("-1".to_string())));
        assert_eq!(parse_units("1e5", 6), Err(AmountError::Invalid("1e5".to_string())));
        assert_eq!(parse_units("0.0000001", 6), Err(AmountError::TooPrecise { decimals: 6 }));
        assert_eq!(
            parse_units("999999999999999999999999999999999999999", 6),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn test_raw_round_trip() {
        for amount in ["0.000001", "1.5", "1234.5", "42", "1000000.123456"] {
            let raw = parse_units(amount, 6).unwrap();
            assert_eq!(parse_units(&format_units(raw, 6), 6), Ok(raw));
        }
        let raw = parse_units("1234.5", 6).unwrap();
        assert_eq!(format_token_amount(raw, 6, 6), "1,234.500000");
        assert_eq!(format_units(raw, 6), "1234.5");
    }
}
