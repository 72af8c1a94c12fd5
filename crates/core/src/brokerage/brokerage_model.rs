use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One buy/sell round trip entered on the profit form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// Number of shares traded. Positive integer.
    pub quantity: u64,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    /// Same-day settlement: billed a single one-sided fee.
    #[serde(rename = "isIntraday")]
    pub intraday: bool,
}

/// Fee-adjusted outcome of a transaction. All amounts are signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeResult {
    pub gross_profit: Decimal,
    #[serde(rename = "fees")]
    pub total_fees: Decimal,
    pub net_profit: Decimal,
    /// Return on investment: net profit / buy value * 100.
    pub roi: Decimal,
}
