//! Property-based tests for currency operations.
//!
//! - Carry normalization is idempotent and value-preserving
//! - Conversion round trips stay within rounding tolerance
//! - Conversion is symmetric around zero
//! - Listing reflects exactly the loaded key set

use std::collections::BTreeSet;

use pivot_shared::types::{CurrencyCode, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::carry::{Fixed, carry};
use super::conversion::convert;
use super::rates::{RateTable, list_supported};

const BUNDLED: &str = include_str!("../../../../data/currency_conversion.json");

fn bundled() -> RateTable {
    RateTable::from_json(BUNDLED).unwrap()
}

fn bundled_codes() -> Vec<String> {
    bundled().codes().map(ToString::to_string).collect()
}

/// Strategy for decimals with up to 9 fractional digits.
fn decimal(max_mantissa: i64) -> impl Strategy<Value = Decimal> {
    (-max_mantissa..=max_mantissa, 0u32..=9).prop_map(|(m, scale)| Decimal::new(m, scale))
}

/// Strategy for raw, possibly non-canonical intermediates.
fn fixed() -> impl Strategy<Value = Fixed> {
    (decimal(1_000_000_000_000_000), decimal(5_000_000_000_000))
        .prop_map(|(units, nanos)| Fixed::new(units, nanos))
}

/// Strategy for canonical amounts of either sign.
fn canonical_amount() -> impl Strategy<Value = (i64, i32)> {
    (0i64..1_000_000_000, 0i32..1_000_000_000, any::<bool>()).prop_map(|(units, nanos, negative)| {
        if negative {
            (-units, -nanos)
        } else {
            (units, nanos)
        }
    })
}

/// Strategy for a supported currency code.
fn supported_code() -> impl Strategy<Value = String> {
    prop::sample::select(bundled_codes())
}

fn rate_of(code: &str) -> Decimal {
    bundled().get(code).unwrap()
}

fn drift(a: &Money, b: &Money) -> Decimal {
    let diff = (a.total_nanos() - b.total_nanos()).abs();
    Decimal::from(i64::try_from(diff).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Carry normalization
    // =========================================================================

    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn prop_carry_is_idempotent(amount in fixed()) {
        let once = amount.normalize().unwrap();
        prop_assert_eq!(once.normalize(), Some(once));
    }

    /// Normalizing never changes the represented quantity.
    #[test]
    fn prop_carry_preserves_value(amount in fixed()) {
        let normalized = carry(amount.units, amount.nanos).unwrap();
        prop_assert_eq!(normalized.total_nanos(), amount.total_nanos());
    }

    /// Normalized intermediates are canonical.
    #[test]
    fn prop_carry_is_canonical(amount in fixed()) {
        prop_assert!(amount.normalize().unwrap().is_canonical());
    }

    /// Integer money normalization agrees with the decimal normalizer.
    #[test]
    fn prop_money_normalized_matches_carry(
        units in -1_000_000_000_000i64..1_000_000_000_000,
        nanos in any::<i32>(),
    ) {
        let money = Money::new("EUR", units, nanos);
        let normalized = money.normalized().unwrap();
        let expected = Fixed::from_money(&money).normalize().unwrap();

        prop_assert!(normalized.is_canonical());
        prop_assert_eq!(normalized.total_nanos(), money.total_nanos());
        prop_assert_eq!(Fixed::from_money(&normalized), expected);
        prop_assert_eq!(normalized.normalized().unwrap(), normalized);
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Conversion always yields a canonical amount in the target currency.
    #[test]
    fn prop_convert_is_canonical(
        (units, nanos) in canonical_amount(),
        from in supported_code(),
        to in supported_code(),
    ) {
        let result = convert(&Money::new(from, units, nanos), &to, &bundled()).unwrap();
        prop_assert!(result.is_canonical());
        prop_assert_eq!(result.currency_code, to);
    }

    /// Converting into the same currency moves the amount by at most the
    /// base-hop rounding, scaled by the rate.
    #[test]
    fn prop_same_currency_round_trip(
        (units, nanos) in canonical_amount(),
        code in supported_code(),
    ) {
        let money = Money::new(code.clone(), units, nanos);
        let result = convert(&money, &code, &bundled()).unwrap();

        let tolerance = rate_of(&code).ceil() + Decimal::ONE;
        prop_assert!(
            drift(&result, &money) <= tolerance,
            "{} -> {} drifted more than {} nanos", money, result, tolerance
        );
    }

    /// Converting away and back lands within a bounded distance of the start.
    #[test]
    fn prop_composition_is_consistent(
        (units, nanos) in canonical_amount(),
        code in supported_code(),
        via in supported_code(),
    ) {
        let rates = bundled();
        let money = Money::new(code.clone(), units, nanos);
        let there = convert(&money, &via, &rates).unwrap();
        let back = convert(&there, &code, &rates).unwrap();

        let from_rate = rate_of(&code);
        let via_rate = rate_of(&via);
        let tolerance = from_rate * (Decimal::TWO + Decimal::ONE / via_rate) + Decimal::TWO;
        prop_assert!(
            drift(&back, &money) <= tolerance,
            "{} -> {} -> {} drifted more than {} nanos", money, there, back, tolerance
        );
    }

    /// Negating the input negates the output exactly.
    #[test]
    fn prop_convert_is_odd(
        (units, nanos) in canonical_amount(),
        from in supported_code(),
        to in supported_code(),
    ) {
        let rates = bundled();
        let positive = convert(&Money::new(from.clone(), units, nanos), &to, &rates).unwrap();
        let negative = convert(&Money::new(from, -units, -nanos), &to, &rates).unwrap();
        prop_assert_eq!(negative, Money::new(to, -positive.units, -positive.nanos));
    }

    /// Codes outside the table are rejected on either side.
    #[test]
    fn prop_unknown_codes_rejected(
        (units, nanos) in canonical_amount(),
        known in supported_code(),
        unknown in "[A-Z]{3}",
    ) {
        let rates = bundled();
        prop_assume!(!rates.contains(&unknown));

        prop_assert!(convert(&Money::new(known.clone(), units, nanos), &unknown, &rates).is_err());
        prop_assert!(convert(&Money::new(unknown, units, nanos), &known, &rates).is_err());
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Listing returns exactly the loaded keys, sorted, without duplicates.
    #[test]
    fn prop_listing_matches_source(
        codes in prop::collection::btree_set("[A-Z]{3}", 1..20),
        rate in 1i64..100_000_000,
    ) {
        let body: Vec<String> = codes
            .iter()
            .map(|code| format!("\"{code}\": \"{}\"", Decimal::new(rate, 4)))
            .collect();
        let rates = RateTable::from_json(&format!("{{{}}}", body.join(","))).unwrap();

        let listed: Vec<&str> = list_supported(&rates)
            .into_iter()
            .map(CurrencyCode::as_str)
            .collect();
        let unique: BTreeSet<&str> = listed.iter().copied().collect();
        let expected: Vec<&str> = codes.iter().map(String::as_str).collect();

        prop_assert_eq!(unique.len(), listed.len());
        prop_assert_eq!(listed, expected);
    }
}
