//! lvm-auto-snapshot - dated LVM snapshot rotation
//!
//! Creates a `<lv>_backup_<YYYY.MM.DD>` snapshot of a logical volume once a
//! day and removes snapshots older than the retention window.
//!
//! Storage is only touched through the [`VolumeManager`] port, and logging
//! goes through the [`RotationLog`] port, so the rotation rules can be driven
//! entirely in memory. Concurrent runs against one volume group are not
//! coordinated; schedule at most one at a time.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{RotateUseCase, RotationReport};
pub use domain::entities::VolumeRef;
pub use domain::policies::{age_days, is_expired, RetentionAction, RetentionDecision};
pub use domain::ports::{RotationLog, VolumeManager, VolumeManagerError};
pub use domain::value_objects::{parse_snapshot_name, snapshot_name, RunContext};
pub use error::{RotationError, RotationResult};
