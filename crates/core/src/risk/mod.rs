pub mod risk_calculator;
pub mod risk_model;

pub use risk_calculator::{adjust_shares, calculate_risk, normalize_allocations};
pub use risk_model::{PortfolioHolding, PortfolioRisk, RiskLevel};
