//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `lvm/` - Volume managers (LVM tools, dry run, in-memory)
//! - `logging/` - Rotation logs (tracing, in-memory)

pub mod logging;
pub mod lvm;

// Re-export for convenience
pub use logging::{MemoryLog, TracingLog};
pub use lvm::{DryRunVolumeManager, InMemoryVolumeManager, LvmTools, LvmVolumeManager};
