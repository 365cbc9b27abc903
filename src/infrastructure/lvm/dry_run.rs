//! Dry-run Volume Manager
//!
//! Lists through the wrapped manager but only logs mutations.

use std::num::NonZeroU32;

use crate::domain::entities::VolumeRef;
use crate::domain::ports::{RotationLog, VolumeManager, VolumeManagerResult};

pub struct DryRunVolumeManager<VM: VolumeManager, L: RotationLog> {
    inner: VM,
    log: L,
}

impl<VM: VolumeManager, L: RotationLog> DryRunVolumeManager<VM, L> {
    pub fn new(inner: VM, log: L) -> Self {
        Self { inner, log }
    }
}

impl<VM: VolumeManager, L: RotationLog> VolumeManager for DryRunVolumeManager<VM, L> {
    fn list_volumes(&self, group: &str) -> VolumeManagerResult<Vec<VolumeRef>> {
        self.inner.list_volumes(group)
    }

    fn create_snapshot(
        &self,
        group: &str,
        source: &str,
        snapshot_name: &str,
        size_gb: NonZeroU32,
    ) -> VolumeManagerResult<()> {
        self.log.info(&format!(
            "dry run: would create {}G snapshot {}/{} of {}/{}",
            size_gb, group, snapshot_name, group, source
        ));
        Ok(())
    }

    fn delete_snapshot(&self, group: &str, name: &str) -> VolumeManagerResult<()> {
        self.log
            .info(&format!("dry run: would remove {}/{}", group, name));
        Ok(())
    }
}
