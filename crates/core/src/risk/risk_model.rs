use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classification::Verdict;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// One row of the portfolio composition form.
///
/// `allocation` is always derived from `shares` via
/// [`normalize_allocations`](crate::risk::normalize_allocations); it is
/// never edited directly while shares drive it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHolding {
    pub ticker: String,
    pub shares: u64,
    pub beta: Decimal,
    /// Percentage share of total portfolio shares.
    pub allocation: Decimal,
}

impl PortfolioHolding {
    pub fn new(ticker: impl Into<String>, shares: u64, beta: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            shares,
            beta,
            allocation: Decimal::ZERO,
        }
    }

    /// Allocation rounded for display.
    pub fn display_allocation(&self) -> Decimal {
        self.allocation.round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// Portfolio volatility tier derived from the weighted beta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl From<Verdict> for RiskLevel {
    /// Beta banded against the market benchmark of 1.0 maps one-to-one
    /// onto the risk tiers: below the band is low, above it is high.
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Undervalued => RiskLevel::Low,
            Verdict::Fair => RiskLevel::Moderate,
            Verdict::Overvalued => RiskLevel::High,
        }
    }
}

/// Aggregate risk of the portfolio composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRisk {
    #[serde(rename = "totalBeta")]
    pub weighted_beta: Decimal,
    pub risk_level: RiskLevel,
}
