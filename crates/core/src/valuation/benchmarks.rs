//! Industry-average benchmark table.
//!
//! Process-wide, immutable constants used as the center of the tolerance
//! band for each classifiable ratio. Ratios without a benchmark (ROE,
//! profit margin, NAV per share) are reported but never banded.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use crate::valuation::RatioKey;

lazy_static! {
    static ref INDUSTRY_BENCHMARKS: BTreeMap<RatioKey, Decimal> = BTreeMap::from([
        (RatioKey::Pe, dec!(15)),
        (RatioKey::Pb, dec!(2.5)),
        (RatioKey::Ps, dec!(2.0)),
        (RatioKey::Peg, dec!(1.0)),
        (RatioKey::EvToEbitda, dec!(12)),
    ]);
}

/// Benchmark for a ratio key, if one is defined.
pub fn industry_benchmark(key: RatioKey) -> Option<Decimal> {
    INDUSTRY_BENCHMARKS.get(&key).copied()
}
