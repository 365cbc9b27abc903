//! LVM Volume Manager
//!
//! Implements the VolumeManager port with the LVM2 command line tools.

use std::num::NonZeroU32;

use serde::Deserialize;

use super::command::ToolCommand;
use crate::domain::entities::VolumeRef;
use crate::domain::ports::{RotationLog, VolumeManager, VolumeManagerError, VolumeManagerResult};

/// Names (or paths) of the LVM tools to invoke
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LvmTools {
    pub lvs: String,
    pub lvcreate: String,
    pub lvremove: String,
}

impl Default for LvmTools {
    fn default() -> Self {
        Self {
            lvs: "lvs".to_string(),
            lvcreate: "lvcreate".to_string(),
            lvremove: "lvremove".to_string(),
        }
    }
}

/// `lvs --report-format=json` output
#[derive(Debug, Deserialize)]
struct LvsOutput {
    report: Vec<LvsReport>,
}

#[derive(Debug, Deserialize)]
struct LvsReport {
    lv: Vec<LvsRecord>,
}

#[derive(Debug, Deserialize)]
struct LvsRecord {
    vg_name: String,
    lv_name: String,
}

/// Parse the JSON report printed by `lvs -o vg_name,lv_name --report-format=json`.
///
/// Only the first report section is read, which is where `lvs` puts the
/// logical volumes.
pub fn parse_lvs_report(json: &str) -> VolumeManagerResult<Vec<VolumeRef>> {
    let output: LvsOutput = serde_json::from_str(json)
        .map_err(|e| VolumeManagerError::MalformedListing(format!("{}: {}", e, json.trim())))?;

    let report = output.report.into_iter().next().ok_or_else(|| {
        VolumeManagerError::MalformedListing("report contains no sections".to_string())
    })?;

    Ok(report
        .lv
        .into_iter()
        .map(|record| VolumeRef::new(record.vg_name, record.lv_name))
        .collect())
}

/// Volume manager backed by `lvs`, `lvcreate` and `lvremove`
pub struct LvmVolumeManager<L: RotationLog> {
    tools: LvmTools,
    log: L,
}

impl<L: RotationLog> LvmVolumeManager<L> {
    pub fn new(log: L) -> Self {
        Self::with_tools(LvmTools::default(), log)
    }

    pub fn with_tools(tools: LvmTools, log: L) -> Self {
        Self { tools, log }
    }

    pub fn tools(&self) -> &LvmTools {
        &self.tools
    }

    /// `lvs` lists every group; filtering is left to the caller.
    pub fn list_command(&self) -> ToolCommand {
        ToolCommand::new(&self.tools.lvs)
            .arg("-o")
            .arg("vg_name,lv_name")
            .arg("--report-format=json")
    }

    /// Read-only snapshot of `group/source`
    pub fn create_command(
        &self,
        group: &str,
        source: &str,
        snapshot_name: &str,
        size_gb: NonZeroU32,
    ) -> ToolCommand {
        ToolCommand::new(&self.tools.lvcreate)
            .arg("--size")
            .arg(format!("{}G", size_gb))
            .arg("--permission")
            .arg("r")
            .arg("--snapshot")
            .arg(format!("{}/{}", group, source))
            .arg("--name")
            .arg(snapshot_name)
    }

    pub fn delete_command(&self, group: &str, name: &str) -> ToolCommand {
        ToolCommand::new(&self.tools.lvremove)
            .arg("-f")
            .arg(format!("{}/{}", group, name))
    }
}

impl<L: RotationLog> VolumeManager for LvmVolumeManager<L> {
    fn list_volumes(&self, _group: &str) -> VolumeManagerResult<Vec<VolumeRef>> {
        let stdout = self.list_command().run(&self.log)?;
        parse_lvs_report(&stdout)
    }

    fn create_snapshot(
        &self,
        group: &str,
        source: &str,
        snapshot_name: &str,
        size_gb: NonZeroU32,
    ) -> VolumeManagerResult<()> {
        self.create_command(group, source, snapshot_name, size_gb)
            .run(&self.log)
            .map(drop)
    }

    fn delete_snapshot(&self, group: &str, name: &str) -> VolumeManagerResult<()> {
        self.delete_command(group, name).run(&self.log).map(drop)
    }
}
