//! Allocation normalization and share-weighted portfolio beta.

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::classification::classify;
use crate::constants::{ALLOCATION_EPSILON, BETA_BENCHMARK};
use crate::errors::{Result, ValidationError};
use crate::risk::{PortfolioHolding, PortfolioRisk};

/// Recomputes every holding's allocation from its share count.
///
/// Must run after every share edit, add or remove so allocation is always
/// derived, never stale. With zero total shares every allocation is zero.
pub fn normalize_allocations(holdings: &mut [PortfolioHolding]) {
    let total_shares: u64 = holdings.iter().map(|h| h.shares).sum();

    if total_shares == 0 {
        for holding in holdings.iter_mut() {
            holding.allocation = Decimal::ZERO;
        }
        return;
    }

    let total = Decimal::from(total_shares);
    for holding in holdings.iter_mut() {
        holding.allocation = Decimal::from(holding.shares) / total * dec!(100);
    }
}

/// Steps a holding's share count by one, clamped at zero.
///
/// The caller re-normalizes allocations afterwards, the same as for any
/// other share edit.
pub fn adjust_shares(holding: &mut PortfolioHolding, increment: bool) {
    holding.shares = if increment {
        holding.shares + 1
    } else {
        holding.shares.saturating_sub(1)
    };
}

/// Computes the share-weighted portfolio beta and its risk tier.
///
/// Precondition: allocations sum to 100 within the epsilon of 0.0001.
/// A violation rejects with the actual total and produces no result.
pub fn calculate_risk(holdings: &[PortfolioHolding]) -> Result<PortfolioRisk> {
    if holdings.is_empty() {
        return Err(ValidationError::EmptyHoldings.into());
    }

    let total_allocation: Decimal = holdings.iter().map(|h| h.allocation).sum();
    if (total_allocation - dec!(100)).abs() > ALLOCATION_EPSILON {
        warn!(
            "Rejecting risk calculation: allocations sum to {}",
            total_allocation
        );
        return Err(ValidationError::AllocationSum(total_allocation).into());
    }

    let weighted_beta: Decimal = holdings
        .iter()
        .map(|h| h.beta * h.allocation / dec!(100))
        .sum();

    let risk_level = classify(weighted_beta, BETA_BENCHMARK).into();
    debug!(
        "Portfolio weighted beta {} -> {:?}",
        weighted_beta, risk_level
    );

    Ok(PortfolioRisk {
        weighted_beta,
        risk_level,
    })
}
