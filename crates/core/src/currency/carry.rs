//! Carry normalization for fixed-point intermediates.
//!
//! Multiplying or dividing `units` and `nanos` separately by a rate leaves a
//! fractional remainder in `units` and may push `nanos` out of range or give
//! it the wrong sign. [`carry`] moves value between the two parts until the
//! amount is canonical again, without changing the quantity it represents.

use pivot_shared::types::{Money, NANOS_PER_UNIT};
use rust_decimal::Decimal;

/// An amount split into units and nanos, either of which may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    /// Whole part, possibly with a fractional remainder.
    pub units: Decimal,
    /// Billionths of a unit, possibly fractional or out of range.
    pub nanos: Decimal,
}

fn nanos_per_unit() -> Decimal {
    Decimal::from(NANOS_PER_UNIT)
}

impl Fixed {
    /// Creates a new intermediate amount.
    #[must_use]
    pub const fn new(units: Decimal, nanos: Decimal) -> Self {
        Self { units, nanos }
    }

    /// Lifts a `Money` value into decimal form.
    #[must_use]
    pub fn from_money(money: &Money) -> Self {
        Self::new(Decimal::from(money.units), Decimal::from(money.nanos))
    }

    /// Returns the represented quantity in nanos, or `None` on overflow.
    #[must_use]
    pub fn total_nanos(&self) -> Option<Decimal> {
        self.units
            .checked_mul(nanos_per_unit())?
            .checked_add(self.nanos)
    }

    /// Returns true if `units` is whole, `|nanos| < 1e9` and the signs agree.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        let zero = Decimal::ZERO;
        self.units.fract().is_zero()
            && self.nanos.abs() < nanos_per_unit()
            && !(self.units > zero && self.nanos < zero)
            && !(self.units < zero && self.nanos > zero)
    }

    /// Returns the canonical form of this amount.
    ///
    /// `nanos` may still carry a fractional part afterwards; rounding it is
    /// left to the caller. Returns `None` if moving value between the parts
    /// leaves the `Decimal` range.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        let scale = nanos_per_unit();
        let zero = Decimal::ZERO;

        let whole = self.units.trunc();
        let spill = self.units.checked_sub(whole)?.checked_mul(scale)?;
        let mut nanos = self.nanos.checked_add(spill)?;

        let carried = (nanos / scale).trunc();
        let mut units = whole.checked_add(carried)?;
        nanos = nanos.checked_sub(carried.checked_mul(scale)?)?;

        if units > zero && nanos < zero {
            units = units.checked_sub(Decimal::ONE)?;
            nanos = nanos.checked_add(scale)?;
        } else if units < zero && nanos > zero {
            units = units.checked_add(Decimal::ONE)?;
            nanos = nanos.checked_sub(scale)?;
        }

        Some(Self { units, nanos })
    }
}

/// Builds a canonical amount from raw `units` and `nanos` parts.
///
/// Returns `None` on `Decimal` overflow.
#[must_use]
pub fn carry(units: Decimal, nanos: Decimal) -> Option<Fixed> {
    Fixed::new(units, nanos).normalize()
}
