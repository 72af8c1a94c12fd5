//! The ±20% tolerance band shared by every three-way verdict in the engine.
//!
//! Valuation ratios band against their industry benchmark; portfolio beta
//! bands against the market benchmark of 1.0. Same rule, one home.

use rust_decimal::Decimal;

use crate::classification::Verdict;
use crate::constants::{AGGREGATE_VERDICT_THRESHOLD, LOWER_BAND_FACTOR, UPPER_BAND_FACTOR};

/// Bands `value` against `benchmark`.
///
/// Strict inequalities: a value sitting exactly on `benchmark * 0.8` or
/// `benchmark * 1.2` is fair.
pub fn classify(value: Decimal, benchmark: Decimal) -> Verdict {
    if value < benchmark * LOWER_BAND_FACTOR {
        Verdict::Undervalued
    } else if value > benchmark * UPPER_BAND_FACTOR {
        Verdict::Overvalued
    } else {
        Verdict::Fair
    }
}

/// Collapses per-ratio verdicts into a single overall verdict.
///
/// Undervalued wins with at least three undervalued votes, overvalued with
/// at least three overvalued votes, otherwise fair. The count threshold is
/// fixed; with fewer than three verdicts present the aggregate can only be
/// fair.
pub fn aggregate_verdict(verdicts: &[Verdict]) -> Verdict {
    let undervalued = verdicts
        .iter()
        .filter(|v| **v == Verdict::Undervalued)
        .count();
    let overvalued = verdicts
        .iter()
        .filter(|v| **v == Verdict::Overvalued)
        .count();

    if undervalued >= AGGREGATE_VERDICT_THRESHOLD {
        Verdict::Undervalued
    } else if overvalued >= AGGREGATE_VERDICT_THRESHOLD {
        Verdict::Overvalued
    } else {
        Verdict::Fair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn bands_around_benchmark() {
        assert_eq!(classify(dec!(10), dec!(15)), Verdict::Undervalued);
        assert_eq!(classify(dec!(15), dec!(15)), Verdict::Fair);
        assert_eq!(classify(dec!(20), dec!(15)), Verdict::Overvalued);
        assert_eq!(classify(dec!(10), dec!(15)).to_string(), "undervalued");
    }

    #[test]
    fn band_edges_are_strict() {
        // 15 * 0.8 = 12: exactly on the edge stays fair.
        assert_eq!(classify(dec!(12.0), dec!(15)), Verdict::Fair);
        assert_eq!(classify(dec!(11.99), dec!(15)), Verdict::Undervalued);
        // 15 * 1.2 = 18
        assert_eq!(classify(dec!(18.0), dec!(15)), Verdict::Fair);
        assert_eq!(classify(dec!(18.01), dec!(15)), Verdict::Overvalued);
    }

    #[test]
    fn negative_values_are_undervalued_against_positive_benchmarks() {
        assert_eq!(classify(dec!(-4), dec!(15)), Verdict::Undervalued);
    }

    #[test]
    fn aggregate_needs_three_votes() {
        use Verdict::*;
        assert_eq!(
            aggregate_verdict(&[Undervalued, Undervalued, Undervalued, Fair]),
            Undervalued
        );
        assert_eq!(
            aggregate_verdict(&[Overvalued, Overvalued, Overvalued, Undervalued]),
            Overvalued
        );
        assert_eq!(aggregate_verdict(&[Undervalued, Undervalued, Fair]), Fair);
        assert_eq!(aggregate_verdict(&[]), Fair);
    }

    #[test]
    fn aggregate_verdict_needs_three_votes_even_with_two_ratios() {
        use Verdict::*;
        // With only two computable ratios the aggregate can never leave
        // fair; the threshold does not scale down with the vote count.
        assert_eq!(aggregate_verdict(&[Undervalued, Undervalued]), Fair);
        assert_eq!(aggregate_verdict(&[Overvalued, Overvalued]), Fair);
    }
}
