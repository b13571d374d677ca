//! Numeric parsing for preview cells.
//!
//! Parsing is strict: only the value itself, optionally surrounded by
//! whitespace, is accepted. Thousands separators are not stripped because
//! free-text cells such as `"clowns, spiders"` or `"1,5"` must never turn
//! into numbers.

/// Parse a string value to a finite `f64`.
///
/// Handles:
/// - Standard numbers: "123", "-45.67", "60.0"
/// - Whitespace: "  123  "
/// - Scientific notation: "1.23e5"
///
/// Returns None for empty, unparseable, NaN or infinite values.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Return the integer a value denotes when it has no fractional part.
///
/// Values outside the `i64` range are not whole numbers for display purposes.
pub fn whole_number(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < -UPPER || value >= UPPER {
        return None;
    }
    Some(value as i64)
}

/// Parse a string and return its integer value if it is whole-valued.
pub fn parse_whole_number(value: &str) -> Option<i64> {
    parse_numeric(value).and_then(whole_number)
}

/// Check if a string represents a valid numeric value.
pub fn is_numeric(value: &str) -> bool {
    parse_numeric(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_integer() {
        assert_eq!(parse_numeric("123"), Some(123.0));
        assert_eq!(parse_numeric("-456"), Some(-456.0));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_numeric("1.70"), Some(1.7));
        assert_eq!(parse_numeric("-0.5"), Some(-0.5));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_numeric("  123  "), Some(123.0));
        assert_eq!(parse_numeric("\t60.0\n"), Some(60.0));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_numeric("1.23e5"), Some(123000.0));
        assert_eq!(parse_numeric("1.5E-3"), Some(0.0015));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("  "), None);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("12.34.56"), None);
        assert_eq!(parse_numeric("1,234"), None);
        assert_eq!(parse_numeric("clowns, spiders"), None);
    }

    #[test]
    fn test_special_values_rejected() {
        assert_eq!(parse_numeric("nan"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("-infinity"), None);
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number(60.0), Some(60));
        assert_eq!(whole_number(-3.0), Some(-3));
        assert_eq!(whole_number(-0.0), Some(0));
        assert_eq!(whole_number(1.7), None);
        assert_eq!(whole_number(1e300), None);
        assert_eq!(whole_number(f64::NAN), None);
    }

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("80.0"), Some(80));
        assert_eq!(parse_whole_number("1e3"), Some(1000));
        assert_eq!(parse_whole_number("1.75"), None);
        assert_eq!(parse_whole_number("yes"), None);
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("123"));
        assert!(is_numeric("45.67"));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric(""));
    }
}
