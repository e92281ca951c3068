//! Interest rate entity
//!
//! This module defines the InterestRate record, its state codes and the
//! invariants every persisted record must satisfy.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{EffectivePeriod, InterestRateId};

use crate::error::InterestRateError;

/// Decimal places the `interest_rate` column keeps
pub const RATE_MAX_SCALE: u32 = 4;

/// Exclusive upper bound of the `interest_rate` column, NUMERIC(7, 4)
pub const RATE_UPPER_BOUND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Lifecycle state of an interest rate
///
/// Stored and exchanged as the three-letter codes `ACT` and `INA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateState {
    /// Rate is currently offered
    #[serde(rename = "ACT")]
    Active,
    /// Rate has been withdrawn (terminal)
    #[serde(rename = "INA")]
    Inactive,
}

impl RateState {
    /// Returns the storage code for this state
    pub fn code(&self) -> &'static str {
        match self {
            RateState::Active => "ACT",
            RateState::Inactive => "INA",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RateState::Active)
    }
}

impl fmt::Display for RateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RateState {
    type Err = InterestRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACT" => Ok(RateState::Active),
            "INA" => Ok(RateState::Inactive),
            other => Err(InterestRateError::validation(format!(
                "Unknown interest rate state '{}'",
                other
            ))),
        }
    }
}

/// An interest rate offered by the product catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRate {
    /// Storage key, `None` until the record is first saved
    pub id: Option<InterestRateId>,
    /// Descriptive label
    pub name: Option<String>,
    /// The rate itself as a decimal fraction (0.03 = 3%)
    pub interest_rate: Decimal,
    /// Lifecycle state
    pub state: RateState,
    /// When the rate becomes effective
    pub start: DateTime<Utc>,
    /// When the rate stopped being effective, `None` while active
    pub end: Option<DateTime<Utc>>,
}

impl InterestRate {
    /// Creates an unsaved active rate with an open effective period
    pub fn new_active(name: Option<String>, interest_rate: Decimal, start: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name,
            interest_rate,
            state: RateState::Active,
            start,
            end: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns true if the record has been assigned a storage key
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns the effective period of this rate
    pub fn period(&self) -> Result<EffectivePeriod, InterestRateError> {
        Ok(EffectivePeriod::new(self.start, self.end)?)
    }

    /// Returns true if the rate is active and in effect at the given instant
    pub fn is_effective_at(&self, timestamp: DateTime<Utc>) -> bool {
        self.is_active()
            && self
                .period()
                .map(|period| period.contains(timestamp))
                .unwrap_or(false)
    }

    /// Moves the rate to the terminal state, closing its period at `at`
    ///
    /// A rate that has not started yet is closed at its start, so the period
    /// stays well formed. Returns false, leaving the record untouched, when it
    /// is already inactive.
    pub fn inactivate(&mut self, at: DateTime<Utc>) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = RateState::Inactive;
        self.end = Some(at.max(self.start));
        true
    }

    /// Checks the record against the entity invariants
    ///
    /// - the rate is non-negative, below 1000 and has at most four decimals
    /// - the name, when present, is not blank
    /// - an active record has no end
    /// - an end, when present, is not before the start
    pub fn validate(&self) -> Result<(), InterestRateError> {
        if self.interest_rate < Decimal::ZERO {
            return Err(InterestRateError::validation(format!(
                "Interest rate must be non-negative, got {}",
                self.interest_rate
            )));
        }

        if self.interest_rate >= RATE_UPPER_BOUND {
            return Err(InterestRateError::validation(format!(
                "Interest rate must be less than {}, got {}",
                RATE_UPPER_BOUND, self.interest_rate
            )));
        }

        if self.interest_rate.normalize().scale() > RATE_MAX_SCALE {
            return Err(InterestRateError::validation(format!(
                "Interest rate must have at most {} decimal places, got {}",
                RATE_MAX_SCALE, self.interest_rate
            )));
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(InterestRateError::validation("Name must not be blank"));
            }
        }

        if self.is_active() && self.end.is_some() {
            return Err(InterestRateError::validation(
                "An active interest rate cannot have an end date",
            ));
        }

        self.period()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn standard_rate() -> InterestRate {
        InterestRate::new_active(
            Some("Standard Rate".to_string()),
            dec!(0.03),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_active_rate() {
        let rate = standard_rate();

        assert_eq!(rate.state, RateState::Active);
        assert!(rate.end.is_none());
        assert!(!rate.is_persisted());
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_state_codes() {
        assert_eq!(RateState::Active.code(), "ACT");
        assert_eq!(RateState::Inactive.to_string(), "INA");
        assert_eq!("INA".parse::<RateState>().unwrap(), RateState::Inactive);
        assert!("DEL".parse::<RateState>().is_err());
    }

    #[test]
    fn test_state_serializes_as_code() {
        let json = serde_json::to_string(&RateState::Active).unwrap();
        assert_eq!(json, "\"ACT\"");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut rate = standard_rate();
        rate.interest_rate = dec!(-0.01);

        let err = rate.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_zero_rate_allowed() {
        let mut rate = standard_rate();
        rate.interest_rate = Decimal::ZERO;
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_rate_outside_column_range_rejected() {
        let mut rate = standard_rate();

        rate.interest_rate = dec!(1000);
        assert!(rate.validate().unwrap_err().to_string().contains("less than 1000"));

        rate.interest_rate = dec!(1000.123456);
        assert!(rate.validate().unwrap_err().is_validation());

        rate.interest_rate = dec!(999.9999);
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_rate_with_more_than_four_decimals_rejected() {
        let mut rate = standard_rate();

        rate.interest_rate = dec!(0.03125);
        assert!(rate.validate().unwrap_err().to_string().contains("decimal places"));

        // Trailing zeros do not count
        rate.interest_rate = dec!(0.030000);
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut rate = standard_rate();
        rate.name = Some("   ".to_string());
        assert!(rate.validate().unwrap_err().is_validation());

        rate.name = None;
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_active_rate_with_end_rejected() {
        let mut rate = standard_rate();
        rate.end = Some(rate.start + Duration::days(30));
        assert!(rate.validate().is_err());
    }

    #[test]
    fn test_inactivate_closes_period() {
        let mut rate = standard_rate();
        let at = rate.start + Duration::days(90);

        assert!(rate.inactivate(at));
        assert_eq!(rate.state, RateState::Inactive);
        assert_eq!(rate.end, Some(at));
        assert!(rate.validate().is_ok());

        // Second call is a no-op
        assert!(!rate.inactivate(at + Duration::days(1)));
        assert_eq!(rate.end, Some(at));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut rate = standard_rate();
        rate.state = RateState::Inactive;
        rate.end = Some(rate.start - Duration::days(1));
        assert!(rate.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_inactivate_before_start_closes_at_start() {
        let mut rate = standard_rate();
        assert!(rate.inactivate(rate.start - Duration::days(1)));
        assert_eq!(rate.end, Some(rate.start));
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_effective_at() {
        let mut rate = standard_rate();
        let mid = rate.start + Duration::days(10);

        assert!(rate.is_effective_at(mid));
        assert!(!rate.is_effective_at(rate.start - Duration::days(1)));

        rate.inactivate(mid);
        assert!(!rate.is_effective_at(mid - Duration::days(1)));
    }
}
