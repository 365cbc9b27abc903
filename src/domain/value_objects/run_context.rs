//! Run context value object
//!
//! Everything a rotation run needs to know about its invocation. Built once
//! from the command line and never mutated afterwards.

use std::num::NonZeroU32;

use chrono::NaiveDate;

use super::naming::snapshot_name;
use crate::domain::entities::VolumeRef;

/// Parameters of a single rotation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Logical volume being snapshotted
    pub source_volume: String,
    /// Volume group holding the source and its snapshots
    pub group: String,
    /// Snapshots older than this many days are pruned
    pub retention_days: u32,
    /// Size of the copy-on-write area for new snapshots, in GB
    pub snapshot_size_gb: NonZeroU32,
    /// Date the run considers "today"
    pub today: NaiveDate,
}

impl RunContext {
    pub fn new(
        group: impl Into<String>,
        source_volume: impl Into<String>,
        retention_days: u32,
        snapshot_size_gb: NonZeroU32,
        today: NaiveDate,
    ) -> Self {
        Self {
            source_volume: source_volume.into(),
            group: group.into(),
            retention_days,
            snapshot_size_gb,
            today,
        }
    }

    /// The source volume as a reference
    pub fn source(&self) -> VolumeRef {
        VolumeRef::new(&self.group, &self.source_volume)
    }

    /// Name of the snapshot this run would create
    pub fn todays_snapshot_name(&self) -> String {
        snapshot_name(&self.source_volume, self.today)
    }
}
