//! Effective-period handling
//!
//! Catalogue records such as interest rates are in force from a start
//! timestamp until an optional end timestamp. An open period (no end) means
//! the record is still in effect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: end {end} is before start {start}")]
    InvalidPeriod {
        start: String,
        end: String,
    },
}

/// The window during which a record is in effect
///
/// `start` is inclusive. `end` is exclusive; `None` means the period is still
/// open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivePeriod {
    /// Start of the period (inclusive)
    pub start: DateTime<Utc>,
    /// End of the period (exclusive), None means open
    pub end: Option<DateTime<Utc>>,
}

impl EffectivePeriod {
    /// Creates a new effective period
    ///
    /// A closed period may end at the instant it starts (an immediately
    /// withdrawn record) but never before.
    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Result<Self, TemporalError> {
        if let Some(end) = end {
            if end < start {
                return Err(TemporalError::InvalidPeriod {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Creates an open period starting at the given time
    pub fn open(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    /// Returns true while the period has no end
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Returns true if this period contains the given timestamp
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && self.end.map_or(true, |e| timestamp < e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_open_period_contains_future() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let period = EffectivePeriod::open(start);

        assert!(period.is_open());
        assert!(period.contains(start));
        assert!(period.contains(start + Duration::days(3650)));
        assert!(!period.contains(start - Duration::seconds(1)));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let result = EffectivePeriod::new(start, Some(start - Duration::days(1)));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }
}
