use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when console input cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("expected a number, got empty input")]
    Empty,

    #[error("invalid number '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a line of console input into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is an error; so is anything that does not
/// parse as a number. Failures are logged with the offending input.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_plain_numbers() {
        assert_eq!(parse_decimal("60000").unwrap(), dec!(60000));
        assert_eq!(parse_decimal("12.5").unwrap(), dec!(12.5));
    }

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_trims_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_accepts_negative_values() {
        assert_eq!(parse_decimal("-500").unwrap(), dec!(-500));
    }

    #[test]
    fn parse_decimal_rejects_empty_input() {
        assert!(matches!(parse_decimal(""), Err(ParseDecimalError::Empty)));
        assert!(matches!(parse_decimal("   "), Err(ParseDecimalError::Empty)));
    }

    #[test]
    fn parse_decimal_rejects_non_numeric_input() {
        let result = parse_decimal("abc");

        assert!(matches!(
            result,
            Err(ParseDecimalError::Invalid { ref input, .. }) if input == "abc"
        ));
    }
}
