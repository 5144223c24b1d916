//! Currency error types.

use std::path::PathBuf;

use pivot_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while converting an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Currency code is not in the rate table.
    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(String),

    /// Rate is zero or negative and cannot be divided by.
    #[error("Invalid exchange rate for {code}: {rate}")]
    InvalidRate {
        /// Currency whose rate is invalid.
        code: String,
        /// The offending rate.
        rate: Decimal,
    },

    /// Result does not fit in the money representation.
    #[error("Converted amount overflows {0}")]
    Overflow(String),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnsupportedCurrency(_) | ConversionError::Overflow(_) => {
                Self::InvalidArgument(err.to_string())
            }
            ConversionError::InvalidRate { .. } => Self::Internal(err.to_string()),
        }
    }
}

/// Errors raised while loading a rate table.
#[derive(Debug, Error)]
pub enum RateLoadError {
    /// The rate file could not be read.
    #[error("Failed to read rate table {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rate source is not a JSON object of unique codes to rates.
    #[error("Malformed rate table: {0}")]
    Parse(#[from] serde_json::Error),

    /// A key is not a three-letter uppercase code.
    #[error("Invalid currency code in rate table: {0:?}")]
    InvalidCurrencyCode(String),

    /// A rate is zero or negative.
    #[error("Rate for {code} must be positive, got {rate}")]
    NonPositiveRate {
        /// Currency with the bad rate.
        code: String,
        /// The offending rate.
        rate: Decimal,
    },

    /// The source holds no currencies at all.
    #[error("Rate table is empty")]
    Empty,
}
