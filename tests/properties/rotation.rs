//! Property tests for whole rotation passes against the in-memory manager.

use std::num::NonZeroU32;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use lvm_auto_snapshot::domain::ports::NoopLog;
use lvm_auto_snapshot::infrastructure::InMemoryVolumeManager;
use lvm_auto_snapshot::{snapshot_name, RotateUseCase, RunContext, VolumeRef};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn context(retention_days: u32) -> RunContext {
    RunContext::new("vg0", "data", retention_days, NonZeroU32::new(1).unwrap(), today())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after a pass, every remaining snapshot is within the window
    /// and today's snapshot exists.
    #[test]
    fn property_pass_leaves_only_retained_snapshots(
        ages in proptest::collection::btree_set(1u64..120, 0..12),
        retention in 0u32..60,
    ) {
        let mut volumes = vec![VolumeRef::new("vg0", "data")];
        for age in &ages {
            let date = today().checked_sub_days(Days::new(*age)).unwrap();
            volumes.push(VolumeRef::new("vg0", snapshot_name("data", date)));
        }
        let vm = InMemoryVolumeManager::with_volumes(volumes);

        let report = RotateUseCase::new(&vm, NoopLog).execute(&context(retention)).unwrap();

        let expected_deleted = ages.iter().filter(|a| **a > u64::from(retention)).count();
        prop_assert_eq!(report.deleted.len(), expected_deleted);
        prop_assert_eq!(report.kept.len(), ages.len() - expected_deleted);
        prop_assert!(vm.volumes().contains(&VolumeRef::new("vg0", snapshot_name("data", today()))));
        prop_assert_eq!(vm.volumes().len(), 1 + report.kept.len() + 1);
    }

    /// PROPERTY: a second pass on the same day makes no changes.
    #[test]
    fn property_second_pass_is_idempotent(
        ages in proptest::collection::btree_set(0u64..90, 0..10),
        retention in 0u32..30,
    ) {
        let mut volumes = vec![VolumeRef::new("vg0", "data")];
        for age in &ages {
            let date = today().checked_sub_days(Days::new(*age)).unwrap();
            volumes.push(VolumeRef::new("vg0", snapshot_name("data", date)));
        }
        let vm = InMemoryVolumeManager::with_volumes(volumes);
        let use_case = RotateUseCase::new(&vm, NoopLog);

        use_case.execute(&context(retention)).unwrap();
        let after_first = vm.volumes();
        let second = use_case.execute(&context(retention)).unwrap();

        prop_assert!(!second.has_changes());
        prop_assert!(second.today_exists);
        prop_assert_eq!(vm.volumes(), after_first);
    }
}
