use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Company financials entered on the valuation form.
///
/// All amounts are non-negative except `price` and `eps`, which may be any
/// real number. `growth_rate` is optional and only consulted by the
/// [`GrowthRateProxy::ExplicitRate`] strategy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub ticker: String,
    pub price: Decimal,
    pub eps: Decimal,
    pub total_equity: Decimal,
    pub total_revenue: Decimal,
    pub operating_cash_flow: Decimal,
    pub outstanding_shares: Decimal,
    pub net_income: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub ebitda: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<Decimal>,
}

/// Named valuation metric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RatioKey {
    Pe,
    Pb,
    Ps,
    Peg,
    Roe,
    ProfitMargin,
    NavPerShare,
    EvToEbitda,
}

impl RatioKey {
    pub fn label(&self) -> &'static str {
        match self {
            RatioKey::Pe => "P/E",
            RatioKey::Pb => "P/B",
            RatioKey::Ps => "P/S",
            RatioKey::Peg => "PEG",
            RatioKey::Roe => "ROE %",
            RatioKey::ProfitMargin => "Profit Margin %",
            RatioKey::NavPerShare => "NAV / Share",
            RatioKey::EvToEbitda => "EV / EBITDA",
        }
    }
}

impl fmt::Display for RatioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Growth-rate strategy for the PEG ratio.
///
/// The growth divisor has no single right answer, so the strategy is an
/// explicit parameter instead of a silent branch. `ReturnOnEquity`
/// (`peg = pe / roe%`) is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrowthRateProxy {
    /// Use the explicit `growth_rate` input field.
    ExplicitRate,
    /// Use return-on-equity (as a percentage) as the growth proxy.
    #[default]
    ReturnOnEquity,
    /// Divide by the fixed default growth rate of 10.
    FixedDefault,
}

/// Computed valuation ratios, keyed by [`RatioKey`].
///
/// A key is present only when every input its formula divides by was
/// non-zero; a ratio with an undefined denominator is omitted outright
/// rather than carried as NaN.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValuationRatios {
    pub ratios: BTreeMap<RatioKey, Decimal>,
}

impl ValuationRatios {
    pub fn get(&self, key: RatioKey) -> Option<Decimal> {
        self.ratios.get(&key).copied()
    }

    pub fn contains(&self, key: RatioKey) -> bool {
        self.ratios.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RatioKey, Decimal)> + '_ {
        self.ratios.iter().map(|(k, v)| (*k, *v))
    }

    pub(crate) fn insert(&mut self, key: RatioKey, value: Decimal) {
        self.ratios.insert(key, value);
    }
}
