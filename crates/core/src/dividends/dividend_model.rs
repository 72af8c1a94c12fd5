use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How often a holding pays its dividend.
///
/// Informational only: captured and persisted with the row, but the
/// aggregate income formulas work from the annual dividend per share and do
/// not rescale by frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Annual,
    #[serde(rename = "Semi-Annual")]
    SemiAnnual,
    #[default]
    Quarterly,
    Monthly,
}

/// One row of the dividend tracker form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendHolding {
    pub ticker: String,
    pub shares: u64,
    pub price: Decimal,
    /// Total dividend paid per share over a year.
    #[serde(rename = "annualDividend")]
    pub annual_dividend: Decimal,
    pub frequency: PaymentFrequency,
}

/// Aggregate dividend income across all holdings.
///
/// Re-derivable on demand from the holdings; never cached independently of
/// its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendSummary {
    pub total_annual_income: Decimal,
    /// Total annual income over total portfolio value, as a percentage.
    pub average_yield: Decimal,
    pub monthly_income: Decimal,
}

impl DividendSummary {
    /// Period-based income split, derived from the annual total on demand.
    pub fn breakdown(&self) -> IncomeBreakdown {
        IncomeBreakdown {
            daily: self.total_annual_income / dec!(365),
            weekly: self.total_annual_income / dec!(52),
            monthly: self.total_annual_income / dec!(12),
            quarterly: self.total_annual_income / dec!(4),
            annual: self.total_annual_income,
        }
    }
}

/// Presentation breakdown of annual income into calendar periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeBreakdown {
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub quarterly: Decimal,
    pub annual: Decimal,
}
