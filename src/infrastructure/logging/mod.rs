//! Rotation log implementations

mod memory;
mod tracing_log;

pub use memory::{LogEntry, MemoryLog};
pub use tracing_log::TracingLog;
