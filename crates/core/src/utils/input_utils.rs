//! Free-form numeric input normalization.
//!
//! Every raw text token coming off a form field goes through
//! [`normalize_number_input`] before it reaches a calculator. The normalizer
//! is the only sanctioned parser for user-entered numbers: it accepts locale
//! decimal commas, lets in-progress tokens (`""`, `"-"`, `"12."`) pass
//! through for the caller to keep displaying, and degrades anything
//! malformed to zero instead of erroring.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

lazy_static! {
    /// In-progress fractional number: optional minus, digits, trailing dot.
    static ref PARTIAL_DECIMAL_REGEX: Regex =
        Regex::new(r"^-?\d+\.$").expect("Invalid regex pattern");

    /// Complete decimal number: optional minus, digits, optional fraction.
    static ref DECIMAL_REGEX: Regex =
        Regex::new(r"^-?\d+(\.\d+)?$").expect("Invalid regex pattern");
}

/// Outcome of normalizing one raw input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedInput {
    /// A parseable number, or the zero sentinel for malformed input.
    Value(Decimal),
    /// An in-progress token passed through unchanged so the field can keep
    /// rendering it while the user types.
    Partial(String),
}

impl NormalizedInput {
    /// Numeric reading of the token. Partial tokens read as their prefix
    /// value: `""` and `"-"` are zero, `"12."` is 12.
    pub fn value(&self) -> Decimal {
        match self {
            NormalizedInput::Value(v) => *v,
            NormalizedInput::Partial(s) => {
                let trimmed = s.trim_end_matches('.');
                Decimal::from_str(trimmed).unwrap_or(Decimal::ZERO)
            }
        }
    }

    /// Whether the token is still being typed.
    pub fn is_partial(&self) -> bool {
        matches!(self, NormalizedInput::Partial(_))
    }
}

/// Normalizes a raw text token into a decimal value or an in-progress token.
///
/// Rules, applied in order:
/// 1. strip surrounding whitespace and map a decimal comma to a dot;
/// 2. `""` and `"-"` pass through (typing in progress);
/// 3. `-?\d+\.` passes through (typing a fraction);
/// 4. anything else that is not a complete decimal degrades to zero;
/// 5. otherwise the parsed value.
///
/// Pure and total: never errors, never panics.
pub fn normalize_number_input(raw: &str) -> NormalizedInput {
    let cleaned = raw.trim().replace(',', ".");

    if cleaned.is_empty() || cleaned == "-" {
        return NormalizedInput::Partial(cleaned);
    }

    if PARTIAL_DECIMAL_REGEX.is_match(&cleaned) {
        return NormalizedInput::Partial(cleaned);
    }

    if !DECIMAL_REGEX.is_match(&cleaned) {
        return NormalizedInput::Value(Decimal::ZERO);
    }

    // Overflow on an absurdly long digit run degrades to zero as well.
    NormalizedInput::Value(Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(
            normalize_number_input("12.5"),
            NormalizedInput::Value(dec!(12.5))
        );
        assert_eq!(
            normalize_number_input("-3.25"),
            NormalizedInput::Value(dec!(-3.25))
        );
        assert_eq!(normalize_number_input("0"), NormalizedInput::Value(dec!(0)));
    }

    #[test]
    fn locale_comma_reads_as_decimal_point() {
        assert_eq!(
            normalize_number_input("12,5"),
            NormalizedInput::Value(dec!(12.5))
        );
        assert_eq!(normalize_number_input("12,5"), normalize_number_input("12.5"));
    }

    #[test]
    fn in_progress_tokens_pass_through() {
        assert_eq!(
            normalize_number_input(""),
            NormalizedInput::Partial(String::new())
        );
        assert_eq!(
            normalize_number_input("-"),
            NormalizedInput::Partial("-".to_string())
        );
        assert_eq!(
            normalize_number_input("12."),
            NormalizedInput::Partial("12.".to_string())
        );
        assert_eq!(
            normalize_number_input("-7."),
            NormalizedInput::Partial("-7.".to_string())
        );
        assert!(normalize_number_input("12.").is_partial());
        assert!(!normalize_number_input("12.5").is_partial());
    }

    #[test]
    fn partial_tokens_read_as_prefix_value() {
        assert_eq!(normalize_number_input("").value(), Decimal::ZERO);
        assert_eq!(normalize_number_input("-").value(), Decimal::ZERO);
        assert_eq!(normalize_number_input("12.").value(), dec!(12));
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert_eq!(
            normalize_number_input("12.3.4"),
            NormalizedInput::Value(Decimal::ZERO)
        );
        assert_eq!(
            normalize_number_input("abc"),
            NormalizedInput::Value(Decimal::ZERO)
        );
        assert_eq!(
            normalize_number_input("1e5"),
            NormalizedInput::Value(Decimal::ZERO)
        );
        assert_eq!(
            normalize_number_input("--2"),
            NormalizedInput::Value(Decimal::ZERO)
        );
        assert_eq!(
            normalize_number_input(".5"),
            NormalizedInput::Value(Decimal::ZERO)
        );
    }

    #[test]
    fn whitespace_is_stripped() {
        assert_eq!(
            normalize_number_input("  42  "),
            NormalizedInput::Value(dec!(42))
        );
    }

    proptest! {
        #[test]
        fn never_panics_on_arbitrary_input(raw in ".*") {
            let _ = normalize_number_input(&raw).value();
        }

        #[test]
        fn comma_and_dot_forms_are_equivalent(int in 0i64..1_000_000, frac in 0u32..1000) {
            let dotted = format!("{int}.{frac}");
            let comma = format!("{int},{frac}");
            prop_assert_eq!(
                normalize_number_input(&comma),
                normalize_number_input(&dotted)
            );
        }
    }
}
