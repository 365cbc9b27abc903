//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod rotation_log;
pub mod volume_manager;

pub use rotation_log::{LogLevel, NoopLog, RotationLog};
pub use volume_manager::{VolumeManager, VolumeManagerError, VolumeManagerResult};
