//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::RotateUseCase;
use crate::domain::ports::VolumeManager;
use crate::infrastructure::{DryRunVolumeManager, LvmVolumeManager, TracingLog};

/// Type alias for the rotate use case as the binary runs it
pub type ConcreteRotateUseCase = RotateUseCase<Box<dyn VolumeManager>, TracingLog>;

/// Create a rotate use case backed by the LVM tools.
///
/// With `dry_run`, volumes are still listed through LVM but creates and
/// removals are only logged.
pub fn create_rotate_use_case(dry_run: bool) -> ConcreteRotateUseCase {
    let log = TracingLog::new();
    let lvm = LvmVolumeManager::new(log);

    let volumes: Box<dyn VolumeManager> = if dry_run {
        Box::new(DryRunVolumeManager::new(lvm, log))
    } else {
        Box::new(lvm)
    };

    RotateUseCase::new(volumes, log)
}
