//! Property tests for the retention rule.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use lvm_auto_snapshot::{age_days, is_expired};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: expiry is exactly `age > retention`.
    #[test]
    fn property_expired_iff_strictly_older(age in -100_000i64..100_000, retention in 0u32..50_000) {
        prop_assert_eq!(is_expired(age, retention), age > i64::from(retention));
    }

    /// PROPERTY: the window boundary is kept, one day past it is not.
    #[test]
    fn property_boundary(retention in 0u32..1_000_000) {
        prop_assert!(!is_expired(i64::from(retention), retention));
        prop_assert!(is_expired(i64::from(retention) + 1, retention));
    }

    /// PROPERTY: future-dated snapshots never expire.
    #[test]
    fn property_negative_age_never_expires(age in i64::MIN..0, retention in any::<u32>()) {
        prop_assert!(!is_expired(age, retention));
    }

    /// PROPERTY: age is the day distance between the two dates.
    #[test]
    fn property_age_matches_day_offset(offset in 0u64..20_000) {
        let snapshot = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let today = snapshot.checked_add_days(Days::new(offset)).unwrap();
        prop_assert_eq!(age_days(today, snapshot), offset as i64);
        prop_assert_eq!(age_days(snapshot, today), -(offset as i64));
    }
}
