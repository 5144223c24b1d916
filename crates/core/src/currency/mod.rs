//! Fixed-point currency conversion against a single base currency.

pub mod carry;
pub mod conversion;
pub mod error;
pub mod loader;
pub mod rates;
pub mod service;

#[cfg(test)]
mod props;

pub use carry::{Fixed, carry};
pub use conversion::convert;
pub use error::{ConversionError, RateLoadError};
pub use rates::{RateTable, list_supported};
pub use service::CurrencyService;
