//! Process execution for the LVM tools
//!
//! Tools are spawned directly, without a shell, so volume names reach them
//! as single arguments and never need quoting.

use std::process::{Command, Stdio};

use crate::domain::ports::{RotationLog, VolumeManagerError, VolumeManagerResult};

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Command line as it would be typed, for logs and errors
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion and return stdout.
    ///
    /// A non-zero exit is an error carrying both output streams.
    pub fn run(&self, log: &dyn RotationLog) -> VolumeManagerResult<String> {
        let line = self.display();
        log.debug(&format!("running {}", line));

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| VolumeManagerError::Unavailable {
                command: line.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(VolumeManagerError::CommandFailed {
                command: line,
                status: output.status.to_string(),
                stdout,
                stderr: stderr.trim().to_string(),
            });
        }

        log.debug(&format!("stdout: {}\nstderr: {}", stdout.trim(), stderr.trim()));
        Ok(stdout)
    }
}
