//! Common test utilities for CLI tests.
//!
//! `FakeLvm` puts stand-in `lvs`, `lvcreate` and `lvremove` scripts in a temp
//! directory. Each script appends its command line to `calls.log`; `lvs`
//! prints whatever listing the test installed.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{Days, NaiveDate};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

pub struct FakeLvm {
    dir: TempDir,
}

impl FakeLvm {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let fake = Self { dir };
        fs::create_dir(fake.bin_dir()).unwrap();
        for tool in ["lvs", "lvcreate", "lvremove"] {
            fake.write_tool(tool);
        }
        fake.set_listing("{\"report\":[{\"lv\":[]}]}");
        fake
    }

    /// Fake tools listing `volumes` as `(vg_name, lv_name)` pairs
    pub fn with_volumes(volumes: &[(&str, &str)]) -> Self {
        let fake = Self::new();
        let records: Vec<_> = volumes
            .iter()
            .map(|(vg, lv)| serde_json::json!({"vg_name": vg, "lv_name": lv}))
            .collect();
        fake.set_listing(&serde_json::json!({"report": [{"lv": records}]}).to_string());
        fake
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn bin_dir(&self) -> PathBuf {
        self.root().join("bin")
    }

    fn write_tool(&self, tool: &str) {
        let root = self.root().display().to_string();
        let script = format!(
            "#!/bin/sh\n\
             echo \"{tool} $*\" >> '{root}/calls.log'\n\
             if [ -f '{root}/fail_{tool}' ]; then echo \"{tool} failed\" >&2; exit 5; fi\n\
             if [ \"{tool}\" = lvs ]; then cat '{root}/listing'; fi\n"
        );
        let path = self.bin_dir().join(tool);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Replace what `lvs` prints
    pub fn set_listing(&self, listing: &str) {
        fs::write(self.root().join("listing"), listing).unwrap();
    }

    /// Make `tool` exit non-zero
    pub fn fail(&self, tool: &str) {
        fs::write(self.root().join(format!("fail_{tool}")), "").unwrap();
    }

    /// Every tool invocation so far, one command line per entry
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.root().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Invocations other than `lvs`
    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("lvs "))
            .collect()
    }

    /// Run the binary with the fake tools first on PATH
    pub fn run(&self, args: &[&str]) -> TestResult {
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut dirs = vec![self.bin_dir()];
                dirs.extend(std::env::split_paths(&existing));
                std::env::join_paths(dirs).unwrap()
            }
            None => self.bin_dir().into_os_string(),
        };

        let output = Command::new(env!("CARGO_BIN_EXE_lvm-auto-snapshot"))
            .args(args)
            .env("PATH", path)
            .output()
            .unwrap();

        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Today's date as the binary sees it
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn days_ago(days: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(days)).unwrap()
}

pub fn backup_name(lv: &str, date: NaiveDate) -> String {
    lvm_auto_snapshot::snapshot_name(lv, date)
}
