pub mod brokerage_calculator;
pub mod brokerage_model;

pub use brokerage_calculator::{calculate_profit, commission_for, validate_transaction};
pub use brokerage_model::{FeeResult, TransactionInput};
