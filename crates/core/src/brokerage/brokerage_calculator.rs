//! Tiered brokerage commission schedule and fee-adjusted profit.
//!
//! The schedule is applied independently to the buy-side and sell-side
//! transaction values. Intraday trades settle one-sided and are billed the
//! larger of the two fees; delivery trades pay both sides.

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::brokerage::{FeeResult, TransactionInput};
use crate::errors::{Result, ValidationError};

/// Tier boundary below which the flat retail rate applies.
const FIRST_TIER_CEILING: Decimal = dec!(100000000);
/// Tier boundary at and above which the negotiable minimum rate applies.
const SECOND_TIER_CEILING: Decimal = dec!(1000000000);

/// Flat rate for intraday trades in the first tier.
const INTRADAY_RATE: Decimal = dec!(0.0056);
/// Flat rate for delivery trades in the first tier.
const DELIVERY_RATE: Decimal = dec!(0.0112);
/// Marginal rate between the tier boundaries, and the minimum negotiable
/// rate above the second boundary.
const UPPER_TIER_RATE: Decimal = dec!(0.006125);

/// Commission for a single transaction side of the given value.
pub fn commission_for(value: Decimal, intraday: bool) -> Decimal {
    if value <= FIRST_TIER_CEILING {
        let rate = if intraday { INTRADAY_RATE } else { DELIVERY_RATE };
        value * rate
    } else if value < SECOND_TIER_CEILING {
        let first_tier = FIRST_TIER_CEILING * DELIVERY_RATE;
        let remaining = value - FIRST_TIER_CEILING;
        first_tier + remaining * UPPER_TIER_RATE
    } else {
        // Negotiable above 1B; billed at the minimum rate.
        value * UPPER_TIER_RATE
    }
}

/// Rejects a transaction that is not ready for calculation.
///
/// Quantity and both prices must be non-zero. This also guards the ROI
/// division: a zero buy value never reaches the profit math.
pub fn validate_transaction(tx: &TransactionInput) -> Result<()> {
    if tx.quantity == 0 {
        return Err(ValidationError::MissingField("quantity".to_string()).into());
    }
    if tx.buy_price == Decimal::ZERO {
        return Err(ValidationError::MissingField("buyPrice".to_string()).into());
    }
    if tx.sell_price == Decimal::ZERO {
        return Err(ValidationError::MissingField("sellPrice".to_string()).into());
    }
    Ok(())
}

/// Computes gross/net profit, total fees and ROI for a transaction.
pub fn calculate_profit(tx: &TransactionInput) -> Result<FeeResult> {
    if let Err(e) = validate_transaction(tx) {
        warn!("Rejecting profit calculation: {}", e);
        return Err(e);
    }

    let quantity = Decimal::from(tx.quantity);
    let buy_value = quantity * tx.buy_price;
    let sell_value = quantity * tx.sell_price;

    let buy_fees = commission_for(buy_value, tx.intraday);
    let sell_fees = commission_for(sell_value, tx.intraday);

    // Intraday settles one side only; bill the larger of the two fees.
    let total_fees = if tx.intraday {
        buy_fees.max(sell_fees)
    } else {
        buy_fees + sell_fees
    };

    let gross_profit = sell_value - buy_value;
    let net_profit = gross_profit - total_fees;
    let roi = net_profit / buy_value * dec!(100);

    debug!(
        "Profit for {} shares: gross {}, fees {}, net {}",
        tx.quantity, gross_profit, total_fees, net_profit
    );

    Ok(FeeResult {
        gross_profit,
        total_fees,
        net_profit,
        roi,
    })
}
