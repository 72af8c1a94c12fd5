pub mod benchmarks;
pub mod valuation_calculator;
pub mod valuation_model;

pub use benchmarks::industry_benchmark;
pub use valuation_calculator::{
    calculate_ratios, classify_ratios, overall_verdict, validate_metrics,
};
pub use valuation_model::{FinancialMetrics, GrowthRateProxy, RatioKey, ValuationRatios};
