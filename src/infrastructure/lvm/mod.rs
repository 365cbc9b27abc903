//! Volume manager implementations

mod command;
mod dry_run;
mod memory;
mod volume_manager;

pub use command::ToolCommand;
pub use dry_run::DryRunVolumeManager;
pub use memory::InMemoryVolumeManager;
pub use volume_manager::{parse_lvs_report, LvmTools, LvmVolumeManager};
