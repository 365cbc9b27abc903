//! In-memory Volume Manager
//!
//! Keeps volumes in a `Vec`. Used by tests and for exercising the rotation
//! logic without LVM.

use std::cell::RefCell;
use std::num::NonZeroU32;

use crate::domain::entities::VolumeRef;
use crate::domain::ports::{VolumeManager, VolumeManagerError, VolumeManagerResult};

#[derive(Debug, Default)]
pub struct InMemoryVolumeManager {
    volumes: RefCell<Vec<VolumeRef>>,
}

impl InMemoryVolumeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volumes(volumes: impl IntoIterator<Item = VolumeRef>) -> Self {
        Self {
            volumes: RefCell::new(volumes.into_iter().collect()),
        }
    }

    /// Current volumes, in creation order
    pub fn volumes(&self) -> Vec<VolumeRef> {
        self.volumes.borrow().clone()
    }

    fn position(&self, group: &str, name: &str) -> Option<usize> {
        self.volumes
            .borrow()
            .iter()
            .position(|v| v.group == group && v.name == name)
    }
}

impl VolumeManager for InMemoryVolumeManager {
    fn list_volumes(&self, _group: &str) -> VolumeManagerResult<Vec<VolumeRef>> {
        Ok(self.volumes())
    }

    fn create_snapshot(
        &self,
        group: &str,
        source: &str,
        snapshot_name: &str,
        _size_gb: NonZeroU32,
    ) -> VolumeManagerResult<()> {
        if self.position(group, source).is_none() {
            return Err(VolumeManagerError::Other(format!(
                "Volume group \"{}\" has no logical volume \"{}\"",
                group, source
            )));
        }
        if self.position(group, snapshot_name).is_some() {
            return Err(VolumeManagerError::Other(format!(
                "Logical Volume \"{}\" already exists in volume group \"{}\"",
                snapshot_name, group
            )));
        }
        self.volumes
            .borrow_mut()
            .push(VolumeRef::new(group, snapshot_name));
        Ok(())
    }

    fn delete_snapshot(&self, group: &str, name: &str) -> VolumeManagerResult<()> {
        let index = self.position(group, name).ok_or_else(|| {
            VolumeManagerError::Other(format!("Failed to find logical volume \"{}/{}\"", group, name))
        })?;
        self.volumes.borrow_mut().remove(index);
        Ok(())
    }
}
