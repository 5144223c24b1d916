//! Request and response contract of the payment charge service.
//!
//! Only the shape of the exchange lives here. Validating and charging a card
//! is the job of whichever processor is plugged into the API.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Money;

/// Card details supplied with a charge.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardInfo {
    /// Primary account number.
    pub credit_card_number: String,
    /// Card verification value.
    pub credit_card_cvv: i32,
    /// Four-digit expiration year.
    pub credit_card_expiration_year: i32,
    /// Expiration month, 1 through 12.
    pub credit_card_expiration_month: i32,
}

impl CreditCardInfo {
    /// Returns the last four digits of the card number, if it has that many.
    #[must_use]
    pub fn last_four(&self) -> Option<&str> {
        let number = self.credit_card_number.as_str();
        number
            .len()
            .checked_sub(4)
            .and_then(|start| number.get(start..))
    }
}

// Card data must never reach the logs.
impl fmt::Debug for CreditCardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardInfo")
            .field("last_four", &self.last_four().unwrap_or("****"))
            .field("credit_card_expiration_year", &self.credit_card_expiration_year)
            .field(
                "credit_card_expiration_month",
                &self.credit_card_expiration_month,
            )
            .finish_non_exhaustive()
    }
}

/// A request to charge an amount to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Amount to charge.
    pub amount: Money,
    /// Card to charge it to.
    pub credit_card: CreditCardInfo,
}

/// Result of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResponse {
    /// Processor-assigned transaction identifier.
    pub transaction_id: String,
}
