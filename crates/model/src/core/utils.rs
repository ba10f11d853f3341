use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Parses a string that is entirely a finite number (surrounding whitespace
/// allowed). `"inf"`, `"NaN"` and partial matches such as `"12abc"` are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Exact canonical text of a decimal. Integral values print as plain digits
/// with no scale, so `7.00` and `7` agree.
pub fn decimal_key(d: &BigDecimal) -> String {
    let normalized = d.normalized();
    let (digits, scale) = normalized.as_bigint_and_exponent();
    if scale > 0 {
        return normalized.to_string();
    }

    let mut text = digits.to_string();
    if text != "0" {
        text.push_str(&"0".repeat(scale.unsigned_abs() as usize));
    }
    text
}

/// Canonical text of a float, agreeing with [`decimal_key`] for the same
/// number.
pub fn float_key(n: f64) -> String {
    // i128 holds every integral f64 below 2^127 exactly
    if n.fract() == 0.0 && n.abs() < 1e38 {
        return (n as i128).to_string();
    }

    let text = n.to_string();
    BigDecimal::from_str(&text)
        .map(|d| decimal_key(&d))
        .unwrap_or(text)
}

/// Canonical text of a numeric string, or `None` when it is not a number.
/// Integers are read exactly, so ids beyond `f64` precision stay distinct.
pub fn numeric_key(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<i128>() {
        return Some(i.to_string());
    }

    let n = parse_number(trimmed)?;
    Some(
        BigDecimal::from_str(trimmed)
            .map(|d| decimal_key(&d))
            .unwrap_or_else(|_| float_key(n)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_full_numbers_only() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -1.5 "), Some(-1.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_float_key() {
        assert_eq!(float_key(3.0), "3");
        assert_eq!(float_key(-0.0), "0");
        assert_eq!(float_key(2.5), "2.5");
    }

    #[test]
    fn test_numeric_key_is_exact_past_f64_precision() {
        assert_eq!(
            numeric_key("9007199254740993").as_deref(),
            Some("9007199254740993")
        );
        assert_ne!(numeric_key("9007199254740993"), numeric_key("9007199254740992"));
        assert_eq!(numeric_key(" +007 ").as_deref(), Some("7"));
        assert_eq!(numeric_key("2.50").as_deref(), Some("2.5"));
        assert_eq!(numeric_key("1e3").as_deref(), Some("1000"));
        assert_eq!(numeric_key("12abc"), None);
        assert_eq!(numeric_key("NaN"), None);
    }

    #[test]
    fn test_decimal_key() {
        let key = |s: &str| decimal_key(&BigDecimal::from_str(s).unwrap());
        assert_eq!(key("7.00"), "7");
        assert_eq!(key("0.000"), "0");
        assert_eq!(key("-1500"), "-1500");
        assert_eq!(key("123456789012345678901234"), "123456789012345678901234");
        assert_eq!(key("2.50"), float_key(2.5));
    }
}
