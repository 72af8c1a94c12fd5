//! Port for the per-form local key-value cache.
//!
//! Each form persists its current record set under a fixed key so a
//! returning user finds their last inputs. The engine itself never reads or
//! writes the store; callers load before rendering and save after edits.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Result;

/// Fixed storage keys, one per form.
pub struct FormKey;

impl FormKey {
    pub const VALUATION: &'static str = "valuationCalculatorData";
    pub const PROFIT: &'static str = "profitCalculatorData";
    pub const PORTFOLIO_RISK: &'static str = "portfolioRiskData";
    pub const DIVIDEND_TRACKER: &'static str = "dividendTrackerData";
}

/// Storage-agnostic key-value store for form records.
///
/// Values are JSON documents; the typed [`load_form`] / [`save_form`]
/// helpers handle the (de)serialization.
pub trait FormStoreTrait: Send + Sync {
    /// Get the raw JSON stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store raw JSON under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Clearing an absent key is fine.
    fn clear(&self, key: &str) -> Result<()>;
}

/// Loads and deserializes the record stored under `key`.
pub fn load_form<T: DeserializeOwned>(store: &dyn FormStoreTrait, key: &str) -> Result<Option<T>> {
    match store.load(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Serializes and stores a record under `key`.
pub fn save_form<T: Serialize>(store: &dyn FormStoreTrait, key: &str, record: &T) -> Result<()> {
    let json = serde_json::to_string(record)?;
    store.save(key, &json)
}
