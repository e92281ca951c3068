//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use chrono::{DateTime, Utc};
use core_kernel::EffectivePeriod;
use domain_product::{InterestRate, InterestRateError, RateState};

/// Asserts that a rate is active with an open period
pub fn assert_active(rate: &InterestRate) {
    assert_eq!(
        rate.state,
        RateState::Active,
        "Expected {:?} to be ACT, got {}",
        rate.id,
        rate.state
    );
    assert!(
        rate.end.is_none(),
        "Active rate {:?} must not have an end, got {:?}",
        rate.id,
        rate.end
    );
}

/// Asserts that a rate was inactivated and its end stamped no later than `by`
///
/// # Panics
///
/// Panics if the rate is still active, has no end, or ends after `by`
pub fn assert_inactivated(rate: &InterestRate, by: DateTime<Utc>) {
    assert_eq!(
        rate.state,
        RateState::Inactive,
        "Expected {:?} to be INA, got {}",
        rate.id,
        rate.state
    );
    let end = rate
        .end
        .unwrap_or_else(|| panic!("Inactive rate {:?} has no end", rate.id));
    assert!(
        end <= by,
        "End {} of rate {:?} is after {}",
        end,
        rate.id,
        by
    );
    assert!(
        end >= rate.start,
        "End {} of rate {:?} is before its start {}",
        end,
        rate.id,
        rate.start
    );
}

/// Asserts that a timestamp falls within a period
pub fn assert_in_period(timestamp: DateTime<Utc>, period: &EffectivePeriod) {
    assert!(
        period.contains(timestamp),
        "Timestamp {} is not within period {:?}",
        timestamp,
        period
    );
}

/// Asserts that an error is a validation error whose message mentions `fragment`
pub fn assert_validation_error(err: &InterestRateError, fragment: &str) {
    match err {
        InterestRateError::Validation(message) => assert!(
            message.to_lowercase().contains(&fragment.to_lowercase()),
            "Validation message '{}' does not mention '{}'",
            message,
            fragment
        ),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{InterestRateFixtures, TemporalFixtures};

    #[test]
    fn test_fixture_states() {
        assert_active(&InterestRateFixtures::standard());
        assert_inactivated(&InterestRateFixtures::retired(), TemporalFixtures::inactive_end());
    }

    #[test]
    #[should_panic(expected = "to be ACT")]
    fn test_assert_active_rejects_inactive() {
        assert_active(&InterestRateFixtures::retired());
    }

    #[test]
    fn test_assert_validation_error_is_case_insensitive() {
        let err = InterestRateError::validation("Interest rate must be non-negative, got -1");
        assert_validation_error(&err, "NON-NEGATIVE");
    }

    #[test]
    fn test_mid_year_in_open_period() {
        assert_in_period(TemporalFixtures::mid_year(), &InterestRateFixtures::standard().period().unwrap());
    }
}
