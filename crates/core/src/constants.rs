//! Fixed design constants shared across the calculators.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Lower edge of the tolerance band: below `benchmark * 0.8` is undervalued.
pub const LOWER_BAND_FACTOR: Decimal = dec!(0.8);

/// Upper edge of the tolerance band: above `benchmark * 1.2` is overvalued.
pub const UPPER_BAND_FACTOR: Decimal = dec!(1.2);

/// Number of same-direction ratio verdicts required before the aggregate
/// verdict leaves "fair". Fixed regardless of how many ratios were computed.
pub const AGGREGATE_VERDICT_THRESHOLD: usize = 3;

/// Tolerance when comparing a summed allocation percentage to exactly 100.
pub const ALLOCATION_EPSILON: Decimal = dec!(0.0001);

/// Benchmark a portfolio beta is banded against (the market itself).
pub const BETA_BENCHMARK: Decimal = dec!(1.0);

/// Growth rate divisor used by the fixed-default PEG proxy.
pub const DEFAULT_GROWTH_RATE: Decimal = dec!(10);

/// Decimal precision for display values (percentages, allocations).
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
