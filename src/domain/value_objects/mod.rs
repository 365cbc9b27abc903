//! Value Objects
//!
//! Immutable, validated values shared across the domain.

mod naming;
mod run_context;

pub use naming::{parse_snapshot_name, snapshot_name, BACKUP_INFIX};
pub use run_context::RunContext;
