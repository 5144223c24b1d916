//! Common types used across the application.

pub mod currency_code;
pub mod health;
pub mod money;
pub mod payment;

pub use currency_code::{CurrencyCode, InvalidCurrencyCode};
pub use health::ServingStatus;
pub use money::{Money, NANOS_PER_UNIT};
pub use payment::{ChargeRequest, ChargeResponse, CreditCardInfo};
