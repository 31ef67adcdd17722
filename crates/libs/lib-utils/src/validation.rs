//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Check that a form field holds a plain non-negative decimal number.
///
/// Accepts `"5"`, `"5.25"` and `".5"`; rejects signs, exponents and separators.
pub fn is_numeric_amount(value: &str) -> bool {
    let value = value.trim();
    let (integer_part, fraction_part) = value.split_once('.').unwrap_or((value, ""));
    !(integer_part.is_empty() && fraction_part.is_empty())
        && integer_part.chars().all(|c| c.is_ascii_digit())
        && fraction_part.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("0xabc", "Recipient").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Recipient"),
            Err("Recipient cannot be empty".to_string())
        );
    }

    #[test]
    fn test_is_numeric_amount() {
        assert!(is_numeric_amount("5"));
        assert!(is_numeric_amount("5.25"));
        assert!(is_numeric_amount(".5"));
        assert!(!is_numeric_amount(""));
        assert!(!is_numeric_amount("."));
        assert!(!is_numeric_amount("-5"));
        assert!(!is_numeric_amount("1e3"));
        assert!(!is_numeric_amount("abc"));
    }
}
