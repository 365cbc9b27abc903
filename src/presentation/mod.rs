//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Log subscriber setup
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Flag definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - tracing subscriber for the binary
//! - `output` - Summary rendering

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::ports::RotationLog;
use crate::infrastructure::TracingLog;
pub use cli::Cli;
pub use factory::create_rotate_use_case;

/// Run one rotation for the parsed command line.
pub fn run(cli: &Cli, today: NaiveDate) -> Result<()> {
    let log = TracingLog::new();
    let context = cli.run_context(today);
    if cli.dry_run {
        log.info("dry run: no volumes will be created or removed");
    }

    let report = create_rotate_use_case(cli.dry_run).execute(&context)?;

    if cli.json {
        println!("{}", serde_json::to_string(&output::render_json(&report, cli.dry_run))?);
    } else {
        log.info(&output::render_summary(&report));
    }
    Ok(())
}
