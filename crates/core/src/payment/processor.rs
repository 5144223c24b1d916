//! Charge processor trait and errors.

use async_trait::async_trait;
use pivot_shared::AppError;
use pivot_shared::types::{ChargeRequest, ChargeResponse};
use thiserror::Error;

/// Errors a charge processor may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChargeError {
    /// The card or amount was refused.
    #[error("Charge rejected: {0}")]
    Rejected(String),

    /// The processor could not be reached.
    #[error("Charge processor unavailable: {0}")]
    Unavailable(String),
}

impl From<ChargeError> for AppError {
    fn from(err: ChargeError) -> Self {
        match err {
            ChargeError::Rejected(_) => Self::InvalidArgument(err.to_string()),
            ChargeError::Unavailable(_) => Self::Unavailable(err.to_string()),
        }
    }
}

/// Charges an amount to a card.
#[async_trait]
pub trait ChargeProcessor: Send + Sync {
    /// Attempts the charge and returns the processor's transaction id.
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeResponse, ChargeError>;
}
