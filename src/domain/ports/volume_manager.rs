//! VolumeManager port - abstraction over the storage volume manager
//!
//! The rotation engine only decides what to create and delete; executing
//! those decisions is delegated to an implementation of this trait.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::domain::entities::VolumeRef;

/// Result type for volume manager operations
pub type VolumeManagerResult<T> = Result<T, VolumeManagerError>;

/// Volume manager failures
#[derive(Debug, Error)]
pub enum VolumeManagerError {
    /// The tool could not be run at all
    #[error("failed to run {command}: {source}")]
    Unavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran, but its listing could not be interpreted
    #[error("malformed volume listing: {0}")]
    MalformedListing(String),

    /// The tool exited unsuccessfully
    #[error("command {command} failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stdout: String,
        stderr: String,
    },

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Abstract volume manager interface
///
/// Implementations:
/// - `LvmVolumeManager` - shells out to the LVM2 tools
/// - `DryRunVolumeManager` - lists through an inner manager, never mutates
/// - `InMemoryVolumeManager` - in-memory for testing
///
/// Calls are blocking and carry no timeout.
pub trait VolumeManager {
    /// List volumes in `group`.
    ///
    /// Implementations may return volumes from other groups as well; callers
    /// filter on [`VolumeRef::group`].
    fn list_volumes(&self, group: &str) -> VolumeManagerResult<Vec<VolumeRef>>;

    /// Create a snapshot of `source` named `snapshot_name` in `group`
    fn create_snapshot(
        &self,
        group: &str,
        source: &str,
        snapshot_name: &str,
        size_gb: NonZeroU32,
    ) -> VolumeManagerResult<()>;

    /// Remove the volume `name` from `group`
    fn delete_snapshot(&self, group: &str, name: &str) -> VolumeManagerResult<()>;
}

impl<T: VolumeManager + ?Sized> VolumeManager for &T {
    fn list_volumes(&self, group: &str) -> VolumeManagerResult<Vec<VolumeRef>> {
        (**self).list_volumes(group)
    }

    fn create_snapshot(
        &self,
        group: &str,
        source: &str,
        snapshot_name: &str,
        size_gb: NonZeroU32,
    ) -> VolumeManagerResult<()> {
        (**self).create_snapshot(group, source, snapshot_name, size_gb)
    }

    fn delete_snapshot(&self, group: &str, name: &str) -> VolumeManagerResult<()> {
        (**self).delete_snapshot(group, name)
    }
}

impl<T: VolumeManager + ?Sized> VolumeManager for Box<T> {
    fn list_volumes(&self, group: &str) -> VolumeManagerResult<Vec<VolumeRef>> {
        (**self).list_volumes(group)
    }

    fn create_snapshot(
        &self,
        group: &str,
        source: &str,
        snapshot_name: &str,
        size_gb: NonZeroU32,
    ) -> VolumeManagerResult<()> {
        (**self).create_snapshot(group, source, snapshot_name, size_gb)
    }

    fn delete_snapshot(&self, group: &str, name: &str) -> VolumeManagerResult<()> {
        (**self).delete_snapshot(group, name)
    }
}
