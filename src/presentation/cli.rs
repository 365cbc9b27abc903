//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - The required flags and their short forms match the classic
//!   `lvm-auto-snapshot` script, so existing cron entries keep working
//! - Argument errors exit with status 1, like every other fatal error

use std::num::NonZeroU32;

use chrono::NaiveDate;
use clap::Parser;

use crate::domain::value_objects::RunContext;

/// Creates a LVM snapshot of the given LV for a given number of days
#[derive(Parser, Debug)]
#[command(name = "lvm-auto-snapshot")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Runs against the same volume group must not overlap.")]
pub struct Cli {
    /// Logical volume
    #[arg(short, long)]
    pub lv: String,

    /// Volume group
    #[arg(short = 'g', long)]
    pub vg: String,

    /// Days to keep the snapshot for
    #[arg(short, long)]
    pub days: u32,

    /// Size of the snapshot in GB
    #[arg(short, long)]
    pub size: NonZeroU32,

    /// Turn on debug messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be removed and created without doing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary on success
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parameters for a run on `today`
    pub fn run_context(&self, today: NaiveDate) -> RunContext {
        RunContext::new(&self.vg, &self.lv, self.days, self.size, today)
    }
}
