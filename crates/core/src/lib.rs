pub mod constants;
pub mod errors;

pub mod brokerage;
pub mod classification;
pub mod dividends;
pub mod risk;
pub mod store;
pub mod utils;
pub mod valuation;

pub use errors::{Error, Result, ValidationError};
