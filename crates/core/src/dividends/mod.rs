pub mod dividend_calculator;
pub mod dividend_model;

pub use dividend_calculator::calculate_summary;
pub use dividend_model::{DividendHolding, DividendSummary, IncomeBreakdown, PaymentFrequency};
