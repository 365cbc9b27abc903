//! Property tests for snapshot name building/parsing.

use chrono::NaiveDate;
use proptest::prelude::*;

use lvm_auto_snapshot::{parse_snapshot_name, snapshot_name};

fn volume_name() -> impl Strategy<Value = String> {
    // LVM allows [A-Za-z0-9+_.-]; names must not start with '-'.
    proptest::string::string_regex("[A-Za-z0-9+_.][A-Za-z0-9+_.-]{0,24}").unwrap()
}

fn calendar_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=12, 1u32..=31).prop_filter_map("valid calendar date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse(build(source, date), source)` recovers the date.
    #[test]
    fn property_snapshot_name_round_trips(source in volume_name(), date in calendar_date()) {
        let name = snapshot_name(&source, date);
        prop_assert_eq!(parse_snapshot_name(&name, &source), Some(date));
    }

    /// PROPERTY: Anything appended after the date stamp is ignored.
    #[test]
    fn property_trailing_suffix_is_ignored(
        source in volume_name(),
        date in calendar_date(),
        suffix in "[._a-z-][A-Za-z0-9._-]{0,8}",
    ) {
        let name = format!("{}{}", snapshot_name(&source, date), suffix);
        prop_assert_eq!(parse_snapshot_name(&name, &source), Some(date));
    }

    /// PROPERTY: Parsing never panics, whatever the volume manager reports.
    #[test]
    fn property_parse_never_panics(candidate in ".{0,64}", source in ".{0,16}") {
        let _ = parse_snapshot_name(&candidate, &source);
    }

    /// PROPERTY: Names that do not start with `<source>_backup_` never match.
    #[test]
    fn property_foreign_prefix_never_matches(
        source in volume_name(),
        other in volume_name(),
        date in calendar_date(),
    ) {
        let name = snapshot_name(&other, date);
        prop_assume!(!name.starts_with(&format!("{}_backup_", source)));
        prop_assert_eq!(parse_snapshot_name(&name, &source), None);
    }
}
