//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use domain_product::{InterestRate, RateState};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for valid rates with four decimal places (0.0000 to 0.9999)
pub fn rate_decimal_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..10000u32).prop_map(|n| Decimal::new(n as i64, 4))
}

/// Strategy for strictly negative rates
pub fn negative_rate_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(-n, 4))
}

/// Strategy for timestamps between 2020 and roughly 2030
pub fn datetime_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..3650i64).prop_map(|days| {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::days(days)
    })
}

/// Strategy for optional, non-blank names within the column limit
pub fn name_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z][A-Za-z0-9 ]{0,39}")
}

/// Strategy for unsaved active rates
pub fn active_rate_strategy() -> impl Strategy<Value = InterestRate> {
    (name_strategy(), rate_decimal_strategy(), datetime_strategy())
        .prop_map(|(name, rate, start)| InterestRate::new_active(name, rate, start))
}

/// Strategy for unsaved rates in either state
///
/// Inactive rates carry an end between 0 and 365 days after their start.
pub fn interest_rate_strategy() -> impl Strategy<Value = InterestRate> {
    (active_rate_strategy(), any::<bool>(), 0i64..365i64).prop_map(|(mut rate, inactive, days)| {
        if inactive {
            rate.state = RateState::Inactive;
            rate.end = Some(rate.start + Duration::days(days));
        }
        rate
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_rates_are_valid(rate in interest_rate_strategy()) {
            prop_assert!(rate.validate().is_ok());
        }

        #[test]
        fn generated_negative_rates_are_rejected(rate in negative_rate_strategy(), start in datetime_strategy()) {
            let record = InterestRate::new_active(None, rate, start);
            prop_assert!(record.validate().is_err());
        }
    }
}
