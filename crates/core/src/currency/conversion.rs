//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for two-hop conversion:
//! - Source -> base: nanos rounded to the nearest whole nano, ties away from zero
//! - Base -> target: nanos truncated toward zero
//! - Both rules are symmetric, so converting `-m` yields exactly `-convert(m)`
//!
//! Pivoting through the base currency needs only two table lookups per call,
//! at the cost of the extra rounding step on the base hop.

use pivot_shared::types::Money;
use rust_decimal::prelude::*;

use super::carry::{Fixed, carry};
use super::error::ConversionError;
use super::rates::RateTable;

/// Converts `from` into `to_code` through the base currency.
///
/// Both currency codes must be present in `rates` and carry positive rates.
/// The result is canonical and tagged with `to_code`. Nothing is returned
/// unless every step succeeds.
pub fn convert(from: &Money, to_code: &str, rates: &RateTable) -> Result<Money, ConversionError> {
    let from_rate = rates.rate(&from.currency_code)?;
    let to_rate = rates.rate(to_code)?;
    ensure_positive(&from.currency_code, from_rate)?;
    ensure_positive(to_code, to_rate)?;

    let overflow = || ConversionError::Overflow(to_code.to_string());
    let base = to_base(Fixed::from_money(from), from_rate).ok_or_else(overflow)?;
    let target = from_base(base, to_rate).ok_or_else(overflow)?;

    Ok(Money::new(
        to_code,
        target.units.to_i64().ok_or_else(overflow)?,
        target.nanos.to_i32().ok_or_else(overflow)?,
    ))
}

/// Divides an amount by its currency's rate, giving whole base-currency nanos.
///
/// Returns `None` if the division or the carry overflows.
#[must_use]
pub fn to_base(amount: Fixed, rate: Decimal) -> Option<Fixed> {
    let base = carry(
        amount.units.checked_div(rate)?,
        amount.nanos.checked_div(rate)?,
    )?;
    let nanos = base
        .nanos
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // Rounding can land exactly on a whole unit.
    carry(base.units, nanos)
}

/// Multiplies a base-currency amount by the target rate, dropping sub-nano dust.
///
/// Returns `None` if the multiplication or the carry overflows.
#[must_use]
pub fn from_base(base: Fixed, rate: Decimal) -> Option<Fixed> {
    let target = carry(base.units.checked_mul(rate)?, base.nanos.checked_mul(rate)?)?;
    Some(Fixed::new(target.units, target.nanos.trunc()))
}

fn ensure_positive(code: &str, rate: Decimal) -> Result<(), ConversionError> {
    if rate > Decimal::ZERO {
        Ok(())
    } else {
        Err(ConversionError::InvalidRate {
            code: code.to_string(),
            rate,
        })
    }
}
