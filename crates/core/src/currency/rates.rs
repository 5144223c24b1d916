//! Immutable table of exchange rates against a single base currency.

use std::collections::BTreeMap;

use pivot_shared::types::CurrencyCode;
use rust_decimal::Decimal;

use super::error::ConversionError;

/// Exchange rates keyed by currency code.
///
/// A rate `r` for code `C` means one unit of the base currency buys `r`
/// units of `C`. The base currency itself has rate 1. The table is never
/// mutated after construction; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Creates a table from already-validated entries.
    ///
    /// Rates are not checked here; conversion rejects non-positive rates on use.
    #[must_use]
    pub const fn new(rates: BTreeMap<CurrencyCode, Decimal>) -> Self {
        Self { rates }
    }

    /// Looks up the rate for a code.
    pub fn rate(&self, code: &str) -> Result<Decimal, ConversionError> {
        self.get(code)
            .ok_or_else(|| ConversionError::UnsupportedCurrency(code.to_string()))
    }

    /// Returns the rate for a code, if present.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Returns true if the code has a rate.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Returns all codes in lexicographic order.
    pub fn codes(&self) -> impl ExactSizeIterator<Item = &CurrencyCode> {
        self.rates.keys()
    }

    /// Returns the first currency whose rate is exactly one.
    #[must_use]
    pub fn base_currency(&self) -> Option<&CurrencyCode> {
        self.rates
            .iter()
            .find(|(_, rate)| **rate == Decimal::ONE)
            .map(|(code, _)| code)
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(CurrencyCode, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, Decimal)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Lists every supported currency code, sorted and without duplicates.
#[must_use]
pub fn list_supported(rates: &RateTable) -> Vec<&CurrencyCode> {
    rates.codes().collect()
}
