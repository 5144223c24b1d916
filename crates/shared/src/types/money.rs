//! Money type with an integral part and a nanosecond-scale fractional part.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! An amount is `units + nanos / 1_000_000_000` of `currency_code`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// Number of nanos in one whole unit.
pub const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Represents a monetary amount with currency.
///
/// A value is canonical when `|nanos| < NANOS_PER_UNIT` and `nanos` has the
/// same sign as `units` (either sign is allowed when `units == 0`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Three-letter currency code (e.g., "USD", "JPY").
    pub currency_code: String,
    /// Whole units of the amount.
    #[serde(default)]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub units: i64,
    /// Billionths of a unit.
    #[serde(default)]
    pub nanos: i32,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(currency_code, 0, 0)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.units < 0 || (self.units == 0 && self.nanos < 0)
    }

    /// Returns true if the amount is in canonical form.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        if self.nanos <= -NANOS_PER_UNIT || self.nanos >= NANOS_PER_UNIT {
            return false;
        }
        !((self.units > 0 && self.nanos < 0) || (self.units < 0 && self.nanos > 0))
    }

    /// Returns the exact amount expressed in nanos.
    #[must_use]
    pub fn total_nanos(&self) -> i128 {
        i128::from(self.units) * i128::from(NANOS_PER_UNIT) + i128::from(self.nanos)
    }

    /// Returns the canonical form of this amount.
    ///
    /// Returns `None` only when carrying whole units out of `nanos` would push
    /// `units` past the `i64` range.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let mut units = self.units.checked_add(i64::from(self.nanos / NANOS_PER_UNIT))?;
        let mut nanos = self.nanos % NANOS_PER_UNIT;

        if units > 0 && nanos < 0 {
            units -= 1;
            nanos += NANOS_PER_UNIT;
        } else if units < 0 && nanos > 0 {
            units += 1;
            nanos -= NANOS_PER_UNIT;
        }

        Some(Self {
            currency_code: self.currency_code.clone(),
            units,
            nanos,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = self.normalized().unwrap_or_else(|| self.clone());
        let sign = if canonical.is_negative() { "-" } else { "" };
        write!(
            f,
            "{sign}{}.{:09} {}",
            canonical.units.unsigned_abs(),
            canonical.nanos.unsigned_abs(),
            canonical.currency_code
        )
    }
}
