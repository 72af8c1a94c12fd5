//! Dividend income aggregation across holdings.

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::dividends::{DividendHolding, DividendSummary};
use crate::errors::{Result, ValidationError};

/// Rejects the holding set unless every row is fully filled in.
fn validate_holdings(holdings: &[DividendHolding]) -> Result<()> {
    if holdings.is_empty() {
        return Err(ValidationError::EmptyHoldings.into());
    }

    for (index, holding) in holdings.iter().enumerate() {
        let field = if holding.ticker.trim().is_empty() {
            Some("ticker")
        } else if holding.shares == 0 {
            Some("shares")
        } else if holding.price == Decimal::ZERO {
            Some("price")
        } else if holding.annual_dividend == Decimal::ZERO {
            Some("annualDividend")
        } else {
            None
        };

        if let Some(field) = field {
            return Err(ValidationError::InvalidHolding {
                index,
                field: field.to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Aggregates annual dividend income, average yield and monthly income.
///
/// - total annual income = sum of shares * annual dividend per share
/// - average yield % = total annual income / total portfolio value * 100
/// - monthly income = total annual income / 12
///
/// No partial aggregation: an invalid row rejects the whole set.
pub fn calculate_summary(holdings: &[DividendHolding]) -> Result<DividendSummary> {
    if let Err(e) = validate_holdings(holdings) {
        warn!("Rejecting dividend summary: {}", e);
        return Err(e);
    }

    let total_annual_income: Decimal = holdings
        .iter()
        .map(|h| Decimal::from(h.shares) * h.annual_dividend)
        .sum();

    let total_value: Decimal = holdings
        .iter()
        .map(|h| Decimal::from(h.shares) * h.price)
        .sum();

    // Validation guarantees a non-zero shares * price per row.
    let average_yield = total_annual_income / total_value * dec!(100);

    debug!(
        "Dividend summary over {} holdings: income {}, value {}",
        holdings.len(),
        total_annual_income,
        total_value
    );

    Ok(DividendSummary {
        total_annual_income,
        average_yield,
        monthly_income: total_annual_income / dec!(12),
    })
}
