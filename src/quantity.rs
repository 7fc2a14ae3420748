//! Quantity and unit normalization.
//!
//! Both parsers are lenient: anything that does not read as a number comes
//! back as the literal text, and blank input means "nothing authored" so the
//! caller can substitute its configured default.

use crate::model::Quantity;

/// Parse a raw quantity expression into its tri-form value.
///
/// Returns `None` for blank input. `"2"` becomes `Number(2.0)` and `"1/2"`
/// reduces to `Number(0.5)`. Anything else (a non-numeric side, or a
/// fraction side with a leading `0` digit such as `"01/2"`) is returned as
/// the trimmed literal. The leading-zero guard keeps zero-padded tokens from
/// being misread as fractions.
pub fn parse_quantity(raw: &str) -> Option<Quantity> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Only the first two `/`-separated segments take part; the rest of a
    // malformed expression like "1/2/3" is ignored.
    let mut segments = trimmed.split('/');
    let left = segments.next().unwrap_or_default().trim();
    let right = segments.next().map(str::trim);

    match right {
        None => match left.parse::<f64>() {
            Ok(number) => Some(Quantity::Number(number)),
            Err(_) => Some(Quantity::Text(trimmed.to_string())),
        },
        Some(right) => match (left.parse::<f64>(), right.parse::<f64>()) {
            (Ok(numerator), Ok(denominator))
                if !left.starts_with('0') && !right.starts_with('0') =>
            {
                Some(Quantity::Number(numerator / denominator))
            }
            _ => Some(Quantity::Text(trimmed.to_string())),
        },
    }
}

/// Trim a raw unit expression; blank input means "no unit".
pub fn parse_units(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_quantity("2"), Some(Quantity::Number(2.0)));
        assert_eq!(parse_quantity(" 2.5 "), Some(Quantity::Number(2.5)));
    }

    #[test]
    fn test_fraction_reduces() {
        assert_eq!(parse_quantity("1/2"), Some(Quantity::Number(0.5)));
        assert_eq!(parse_quantity("3/4"), Some(Quantity::Number(0.75)));
    }

    #[test]
    fn test_leading_zero_stays_literal() {
        assert_eq!(parse_quantity("01/2"), Some(Quantity::Text("01/2".into())));
        assert_eq!(parse_quantity("1/02"), Some(Quantity::Text("1/02".into())));
    }

    #[test]
    fn test_non_numeric_denominator_stays_literal() {
        assert_eq!(parse_quantity("1/a"), Some(Quantity::Text("1/a".into())));
    }

    #[test]
    fn test_free_form_text() {
        assert_eq!(
            parse_quantity("a pinch"),
            Some(Quantity::Text("a pinch".into()))
        );
    }

    #[test]
    fn test_blank_is_absent() {
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("   "), None);
    }

    #[test]
    fn test_extra_segments_ignored() {
        assert_eq!(parse_quantity("1/2/3"), Some(Quantity::Number(0.5)));
    }

    #[test]
    fn test_zero_denominator_stays_literal() {
        // "0" itself has a leading zero digit, so the guard applies.
        assert_eq!(parse_quantity("4/0"), Some(Quantity::Text("4/0".into())));
    }

    #[test]
    fn test_units_trimmed() {
        assert_eq!(parse_units(" cups "), Some("cups".to_string()));
        assert_eq!(parse_units(""), None);
        assert_eq!(parse_units("  "), None);
    }
}
