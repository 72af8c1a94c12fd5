//! Valuation ratio calculation from entered company financials.
//!
//! Pure functions: the calculator never mutates its input and performs no
//! I/O. A ratio whose formula divides by a zero field is omitted from the
//! result map instead of being produced as NaN or infinity.

use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::classification::{aggregate_verdict, classify, Verdict};
use crate::constants::DEFAULT_GROWTH_RATE;
use crate::errors::{Result, ValidationError};
use crate::valuation::benchmarks::industry_benchmark;
use crate::valuation::{FinancialMetrics, GrowthRateProxy, RatioKey, ValuationRatios};

const HUNDRED: Decimal = rust_decimal_macros::dec!(100);

/// Rejects a metrics record that is not ready for calculation.
///
/// The valuation form requires every field to be filled in with a non-zero
/// number before "calculate" fires; this is that rule, surfaced as a
/// validation error the UI layer can display.
pub fn validate_metrics(metrics: &FinancialMetrics) -> Result<()> {
    if metrics.ticker.trim().is_empty() {
        return Err(ValidationError::MissingField("ticker".to_string()).into());
    }

    let required = [
        ("price", metrics.price),
        ("eps", metrics.eps),
        ("totalEquity", metrics.total_equity),
        ("totalRevenue", metrics.total_revenue),
        ("operatingCashFlow", metrics.operating_cash_flow),
        ("outstandingShares", metrics.outstanding_shares),
        ("netIncome", metrics.net_income),
        ("totalAssets", metrics.total_assets),
        ("totalLiabilities", metrics.total_liabilities),
        ("ebitda", metrics.ebitda),
    ];

    for (field, value) in required {
        if value == Decimal::ZERO {
            return Err(ValidationError::MissingField(field.to_string()).into());
        }
    }

    Ok(())
}

/// Computes every ratio whose required inputs are all non-zero.
///
/// Formulas (book value = total equity / outstanding shares; market cap =
/// price * outstanding shares; enterprise value = market cap + liabilities
/// - (assets - liabilities)):
///
/// - P/E   = price / eps
/// - P/B   = price / book value
/// - P/S   = market cap / total revenue
/// - PEG   = P/E / growth proxy (strategy given by `growth_proxy`)
/// - ROE % = net income / total equity * 100
/// - profit margin % = net income / total revenue * 100
/// - NAV per share = (assets - liabilities) / outstanding shares
/// - EV/EBITDA = enterprise value / ebitda
pub fn calculate_ratios(
    metrics: &FinancialMetrics,
    growth_proxy: GrowthRateProxy,
) -> ValuationRatios {
    debug!(
        "Calculating valuation ratios for {} with {:?} growth proxy",
        metrics.ticker, growth_proxy
    );

    let mut ratios = ValuationRatios::default();

    let market_cap = metrics.price * metrics.outstanding_shares;

    if metrics.eps != Decimal::ZERO {
        ratios.insert(RatioKey::Pe, metrics.price / metrics.eps);
    }

    if metrics.outstanding_shares != Decimal::ZERO {
        let book_value = metrics.total_equity / metrics.outstanding_shares;
        if book_value != Decimal::ZERO {
            ratios.insert(RatioKey::Pb, metrics.price / book_value);
        }

        let nav = metrics.total_assets - metrics.total_liabilities;
        ratios.insert(RatioKey::NavPerShare, nav / metrics.outstanding_shares);
    }

    if metrics.total_revenue != Decimal::ZERO {
        ratios.insert(RatioKey::Ps, market_cap / metrics.total_revenue);
        ratios.insert(
            RatioKey::ProfitMargin,
            metrics.net_income / metrics.total_revenue * HUNDRED,
        );
    }

    if metrics.total_equity != Decimal::ZERO {
        ratios.insert(
            RatioKey::Roe,
            metrics.net_income / metrics.total_equity * HUNDRED,
        );
    }

    if let Some(pe) = ratios.get(RatioKey::Pe) {
        if let Some(growth) = resolve_growth_rate(metrics, growth_proxy) {
            if growth != Decimal::ZERO {
                ratios.insert(RatioKey::Peg, pe / growth);
            }
        }
    }

    if metrics.ebitda != Decimal::ZERO {
        let enterprise_value = market_cap + metrics.total_liabilities
            - (metrics.total_assets - metrics.total_liabilities);
        ratios.insert(RatioKey::EvToEbitda, enterprise_value / metrics.ebitda);
    }

    ratios
}

/// Resolves the PEG growth divisor for the chosen strategy.
fn resolve_growth_rate(
    metrics: &FinancialMetrics,
    growth_proxy: GrowthRateProxy,
) -> Option<Decimal> {
    match growth_proxy {
        GrowthRateProxy::ExplicitRate => metrics.growth_rate,
        GrowthRateProxy::ReturnOnEquity => {
            if metrics.total_equity == Decimal::ZERO {
                None
            } else {
                Some(metrics.net_income / metrics.total_equity * HUNDRED)
            }
        }
        GrowthRateProxy::FixedDefault => Some(DEFAULT_GROWTH_RATE),
    }
}

/// Bands each computed ratio that has an industry benchmark.
pub fn classify_ratios(ratios: &ValuationRatios) -> BTreeMap<RatioKey, Verdict> {
    ratios
        .iter()
        .filter_map(|(key, value)| {
            industry_benchmark(key).map(|benchmark| (key, classify(value, benchmark)))
        })
        .collect()
}

/// Overall verdict across all banded ratios.
pub fn overall_verdict(ratios: &ValuationRatios) -> Verdict {
    let verdicts: Vec<Verdict> = classify_ratios(ratios).into_values().collect();
    aggregate_verdict(&verdicts)
}
