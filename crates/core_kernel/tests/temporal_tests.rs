//! Unit tests for the Temporal module
//!
//! Tests cover EffectivePeriod creation, containment and serialization.

use core_kernel::{EffectivePeriod, TemporalError};
use chrono::{Duration, TimeZone, Utc};

mod effective_period {
    use super::*;

    mod creation {
        use super::*;

        #[test]
        fn test_new_creates_closed_period() {
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
            let period = EffectivePeriod::new(start, Some(end)).unwrap();

            assert_eq!(period.start, start);
            assert_eq!(period.end, Some(end));
            assert!(!period.is_open());
        }

        #[test]
        fn test_new_with_none_end_is_open() {
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let period = EffectivePeriod::new(start, None).unwrap();

            assert!(period.is_open());
        }

        #[test]
        fn test_new_fails_when_end_before_start() {
            let start = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
            let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let result = EffectivePeriod::new(start, Some(end));

            assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
        }

        #[test]
        fn test_new_allows_end_equal_to_start() {
            let start = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
            let period = EffectivePeriod::new(start, Some(start)).unwrap();

            // A zero-length period is in effect at no instant
            assert!(!period.contains(start));
        }
    }

    mod containment {
        use super::*;

        #[test]
        fn test_contains_timestamp_in_middle() {
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
            let period = EffectivePeriod::new(start, Some(end)).unwrap();

            let mid = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
            assert!(period.contains(mid));
        }

        #[test]
        fn test_start_inclusive_end_exclusive() {
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let end = start + Duration::days(30);
            let period = EffectivePeriod::new(start, Some(end)).unwrap();

            assert!(period.contains(start));
            assert!(!period.contains(end));
            assert!(period.contains(end - Duration::seconds(1)));
        }

        #[test]
        fn test_open_period_contains_far_future() {
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let period = EffectivePeriod::open(start);

            assert!(period.contains(start + Duration::days(36500)));
        }
    }

    #[test]
    fn test_serialization_keeps_null_end() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let period = EffectivePeriod::open(start);

        let json = serde_json::to_value(period).unwrap();
        assert!(json["end"].is_null());

        let back: EffectivePeriod = serde_json::from_value(json).unwrap();
        assert_eq!(back, period);
    }
}
