//! Currency service for conversion and listing operations.
//!
//! This module provides the main service interface the transport layer talks
//! to. It owns a shared, read-only rate table and hands it to the pure
//! conversion functions on every call.

use std::sync::Arc;

use pivot_shared::types::{CurrencyCode, Money};

use super::conversion;
use super::error::ConversionError;
use super::rates::{RateTable, list_supported};

/// Currency service bound to one rate table for its whole lifetime.
///
/// Cloning is cheap and every clone reads the same table.
#[derive(Debug, Clone)]
pub struct CurrencyService {
    rates: Arc<RateTable>,
}

impl CurrencyService {
    /// Creates a service over a loaded rate table.
    #[must_use]
    pub fn new(rates: impl Into<Arc<RateTable>>) -> Self {
        Self {
            rates: rates.into(),
        }
    }

    /// Returns the underlying rate table.
    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Lists the supported currency codes in lexicographic order.
    ///
    /// # Example
    ///
    /// ```
    /// use pivot_core::currency::{CurrencyService, RateTable};
    ///
    /// let rates = RateTable::from_json(r#"{"USD": "1.1305", "EUR": "1.0"}"#).unwrap();
    /// let service = CurrencyService::new(rates);
    /// let codes: Vec<&str> = service.supported_currencies().iter().map(|c| c.as_str()).collect();
    /// assert_eq!(codes, ["EUR", "USD"]);
    /// ```
    #[must_use]
    pub fn supported_currencies(&self) -> Vec<&CurrencyCode> {
        list_supported(&self.rates)
    }

    /// Converts an amount into another supported currency.
    ///
    /// # Example
    ///
    /// ```
    /// use pivot_core::currency::{CurrencyService, RateTable};
    /// use pivot_shared::types::Money;
    ///
    /// let rates = RateTable::from_json(r#"{"EUR": "1.0", "USD": "1.1305", "JPY": "126.22"}"#).unwrap();
    /// let service = CurrencyService::new(rates);
    /// let jpy = service.convert(&Money::new("USD", 10, 0), "JPY").unwrap();
    /// assert_eq!(jpy, Money::new("JPY", 1116, 497_125_220));
    /// ```
    pub fn convert(&self, from: &Money, to_code: &str) -> Result<Money, ConversionError> {
        conversion::convert(from, to_code, &self.rates)
    }
}
