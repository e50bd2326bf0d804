// src/domain/amount.rs

/// Parses a plain number, ignoring surrounding whitespace.
/// Non-finite values (`nan`, `inf`) are treated as unparseable.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a currency-formatted amount such as `$1,250.00` or ` 85 `.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let digits: String = digits.chars().filter(|c| *c != ',').collect();
    parse_number(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_currency_formats() {
        assert_eq!(parse_amount("$250"), Some(250.0));
        assert_eq!(parse_amount(" $1,200.50 "), Some(1200.5));
        assert_eq!(parse_amount("85"), Some(85.0));
        assert_eq!(parse_amount("$ 40"), Some(40.0));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("cheap"), None);
        assert_eq!(parse_number("nan"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("4.5.1"), None);
    }
}
