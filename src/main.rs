//! lvm-auto-snapshot CLI
//!
//! Usage: lvm-auto-snapshot --lv <LV> --vg <VG> --days <DAYS> --size <SIZE>
//!
//! Exits 0 on success (including when today's snapshot already exists) and 1
//! on any error.

use std::process::ExitCode;

use clap::Parser;

use lvm_auto_snapshot::domain::ports::RotationLog;
use lvm_auto_snapshot::infrastructure::TracingLog;
use lvm_auto_snapshot::presentation::{self, logging, Cli};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    let today = chrono::Local::now().date_naive();
    match presentation::run(&cli, today) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            TracingLog::new().error(&format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
