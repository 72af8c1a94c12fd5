pub mod band_classifier;
pub mod classification_model;

pub use band_classifier::{aggregate_verdict, classify};
pub use classification_model::Verdict;
