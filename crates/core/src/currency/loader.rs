//! Loading the rate table from its JSON source.
//!
//! The source is a single JSON object mapping currency codes to rates, e.g.
//! `{"EUR": "1.0", "USD": "1.1305"}`. Rates may be strings or numbers. Keys
//! must be unique, well-formed codes and every rate must be positive.

use std::collections::BTreeMap;
use std::path::Path;

use pivot_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{MapPreventDuplicates, serde_as};

use super::error::RateLoadError;
use super::rates::RateTable;

#[serde_as]
#[derive(Deserialize)]
#[serde(transparent)]
struct RateSource(#[serde_as(as = "MapPreventDuplicates<_, _>")] BTreeMap<String, Decimal>);

impl RateTable {
    /// Parses and validates a rate table from JSON text.
    pub fn from_json(json: &str) -> Result<Self, RateLoadError> {
        let RateSource(raw) = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(RateLoadError::Empty);
        }

        let mut rates = BTreeMap::new();
        for (key, rate) in raw {
            let code: CurrencyCode = key
                .parse()
                .map_err(|_| RateLoadError::InvalidCurrencyCode(key.clone()))?;
            if rate <= Decimal::ZERO {
                return Err(RateLoadError::NonPositiveRate { code: key, rate });
            }
            rates.insert(code, rate);
        }

        Ok(Self::new(rates))
    }

    /// Reads and validates a rate table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RateLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RateLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
