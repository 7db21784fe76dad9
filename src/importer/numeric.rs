// ==========================================
// Snackhouse POS - Numeric cell cleaning
// ==========================================
// Normalizes currency/number cells ("₱1,234.56") into f64.
// Intentionally lossy: negative signs buried in currency
// noise and non-"." thousands separators are stripped.
// ==========================================

/// Cleans a raw cell value into a number.
///
/// Empty cells become 0. Values that already parse as a
/// number are returned as-is (sign preserved). Anything else
/// is reduced to its digits and decimal points before
/// parsing; unparseable leftovers become 0.
pub fn clean_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Ok(n) = trimmed.parse::<f64>() {
        return n;
    }

    let digits_only: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits_only.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_strings() {
        assert_eq!(clean_number("₱1,234.56"), 1234.56);
        assert_eq!(clean_number("PHP 300"), 300.0);
        assert_eq!(clean_number("₱150"), 150.0);
    }

    #[test]
    fn test_plain_numbers_pass_through() {
        assert_eq!(clean_number("42"), 42.0);
        assert_eq!(clean_number("150.5"), 150.5);
        assert_eq!(clean_number("-5"), -5.0);
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(clean_number(""), 0.0);
        assert_eq!(clean_number("   "), 0.0);
        assert_eq!(clean_number("n/a"), 0.0);
        assert_eq!(clean_number("..."), 0.0);
    }
}
