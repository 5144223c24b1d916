//! Payment charge seam.
//!
//! Charging a card is done by an external processor. This module only fixes
//! the trait the API calls through and the errors a processor may report.

pub mod processor;

pub use processor::{ChargeError, ChargeProcessor};
