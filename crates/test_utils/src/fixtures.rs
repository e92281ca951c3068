//! Pre-built Test Fixtures
//!
//! Provides ready-to-use interest rates and timestamps. Values are fixed so
//! assertions can compare against literals.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::InterestRateId;
use domain_product::{InterestRate, MockInterestRateRepository, RateState};
use rust_decimal_macros::dec;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard effective start (Jan 1, 2024)
    pub fn rate_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// Mid-year timestamp for containment tests
    pub fn mid_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// Timestamp before every fixture rate starts
    pub fn before_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap()
    }

    /// End stamped on the inactive fixture (180 days after start)
    pub fn inactive_end() -> DateTime<Utc> {
        Self::rate_start() + Duration::days(180)
    }
}

/// Fixture for interest rate records
pub struct InterestRateFixtures;

impl InterestRateFixtures {
    /// Active 3% rate with id 1
    pub fn standard() -> InterestRate {
        InterestRate {
            id: Some(InterestRateId::new(1)),
            name: Some("Standard Rate".to_string()),
            interest_rate: dec!(0.03),
            state: RateState::Active,
            start: TemporalFixtures::rate_start(),
            end: None,
        }
    }

    /// Active 5% rate with id 2
    pub fn premium() -> InterestRate {
        InterestRate {
            id: Some(InterestRateId::new(2)),
            name: Some("Premium Rate".to_string()),
            interest_rate: dec!(0.05),
            state: RateState::Active,
            start: TemporalFixtures::rate_start(),
            end: None,
        }
    }

    /// Inactive 1.5% rate with id 3, closed after 180 days
    pub fn retired() -> InterestRate {
        InterestRate {
            id: Some(InterestRateId::new(3)),
            name: Some("Retired Promo".to_string()),
            interest_rate: dec!(0.015),
            state: RateState::Inactive,
            start: TemporalFixtures::rate_start(),
            end: Some(TemporalFixtures::inactive_end()),
        }
    }

    /// Unsaved active rate without a name
    pub fn unsaved() -> InterestRate {
        InterestRate::new_active(None, dec!(0.025), TemporalFixtures::rate_start())
    }

    /// The three persisted fixtures, in id order
    pub fn catalogue() -> Vec<InterestRate> {
        vec![Self::standard(), Self::premium(), Self::retired()]
    }
}

/// Creates a mock repository seeded with [`InterestRateFixtures::catalogue`]
pub async fn seeded_repository() -> MockInterestRateRepository {
    MockInterestRateRepository::with_rates(InterestRateFixtures::catalogue()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_satisfy_invariants() {
        for rate in InterestRateFixtures::catalogue() {
            assert!(rate.validate().is_ok(), "fixture {:?} is invalid", rate.id);
        }
        assert!(InterestRateFixtures::unsaved().validate().is_ok());
    }

    #[tokio::test]
    async fn test_seeded_repository_keeps_ids() {
        let repository = seeded_repository().await;
        let retired = repository.stored(InterestRateId::new(3)).await.unwrap();
        assert_eq!(retired.state, RateState::Inactive);
    }
}
