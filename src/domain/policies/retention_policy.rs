//! Retention Policy
//!
//! Decides whether a snapshot has outlived its retention window.
//! Pure: no I/O, no clock. The caller supplies "today".

use chrono::NaiveDate;

use crate::domain::entities::VolumeRef;

/// What to do with an existing snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionAction {
    Keep,
    Delete,
}

/// Outcome of evaluating one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionDecision {
    pub volume: VolumeRef,
    /// Age in whole days; negative for snapshots dated in the future
    pub age_days: i64,
    pub action: RetentionAction,
}

impl RetentionDecision {
    pub fn is_delete(&self) -> bool {
        self.action == RetentionAction::Delete
    }
}

/// Whole days from `snapshot_date` to `today`.
pub fn age_days(today: NaiveDate, snapshot_date: NaiveDate) -> i64 {
    (today - snapshot_date).num_days()
}

/// A snapshot is expired once it is strictly older than the window.
///
/// An age equal to `retention_days` is still kept, and future-dated
/// snapshots (negative age) never expire.
pub fn is_expired(age_days: i64, retention_days: u32) -> bool {
    age_days > i64::from(retention_days)
}

/// Retention window bound to a run date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    today: NaiveDate,
    retention_days: u32,
}

impl RetentionPolicy {
    pub fn new(today: NaiveDate, retention_days: u32) -> Self {
        Self {
            today,
            retention_days,
        }
    }

    pub fn retention_days(&self) -> u32 {
        self.retention_days
    }

    /// Evaluate a snapshot taken on `snapshot_date`
    pub fn evaluate(&self, volume: VolumeRef, snapshot_date: NaiveDate) -> RetentionDecision {
        let age = age_days(self.today, snapshot_date);
        let action = if is_expired(age, self.retention_days) {
            RetentionAction::Delete
        } else {
            RetentionAction::Keep
        };
        RetentionDecision {
            volume,
            age_days: age,
            action,
        }
    }
}
