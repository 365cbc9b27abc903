//! Domain Layer
//!
//! The rotation rules, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Volumes as the volume manager reports them
//! - `value_objects/` - Snapshot naming scheme and run parameters
//! - `policies/` - Retention rules
//! - `ports/` - Interfaces for the volume manager and logging
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Storage is only touched through the `VolumeManager` port
//! 2. **No clock** - "today" is part of the run context
//! 3. **Ports & Adapters** - All side effects go through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
