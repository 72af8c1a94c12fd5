//! In-memory form store for tests and embedded use.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::errors::{Error, Result};
use crate::store::FormStoreTrait;

/// `FormStoreTrait` over a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormStoreTrait for MemoryFormStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| Error::Repository(format!("Form store lock poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::Repository(format!("Form store lock poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::Repository(format!("Form store lock poisoned: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dividends::{DividendHolding, PaymentFrequency};
    use crate::store::{load_form, save_form, FormKey};
    use rust_decimal_macros::dec;

    #[test]
    fn round_trips_a_form_record() {
        let store = MemoryFormStore::new();
        let holdings = vec![DividendHolding {
            ticker: "AAA".to_string(),
            shares: 100,
            price: dec!(50),
            annual_dividend: dec!(2),
            frequency: PaymentFrequency::Monthly,
        }];

        save_form(&store, FormKey::DIVIDEND_TRACKER, &holdings).unwrap();
        let loaded: Vec<DividendHolding> =
            load_form(&store, FormKey::DIVIDEND_TRACKER).unwrap().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].ticker, "AAA");
        assert_eq!(loaded[0].frequency, PaymentFrequency::Monthly);
    }

    #[test]
    fn clear_removes_only_the_given_key() {
        let store = MemoryFormStore::new();
        store.save(FormKey::PROFIT, "{}").unwrap();
        store.save(FormKey::PORTFOLIO_RISK, "{}").unwrap();

        store.clear(FormKey::PROFIT).unwrap();

        assert!(store.load(FormKey::PROFIT).unwrap().is_none());
        assert!(store.load(FormKey::PORTFOLIO_RISK).unwrap().is_some());
        // Clearing an absent key is not an error.
        store.clear(FormKey::PROFIT).unwrap();
    }
}
