//! Tracing-backed rotation log
//!
//! Forwards rotation log lines to `tracing`. The subscriber installed by the
//! binary decides formatting and which levels are shown.

use crate::domain::ports::{LogLevel, RotationLog};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl TracingLog {
    pub fn new() -> Self {
        Self
    }
}

impl RotationLog for TracingLog {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
    }
}
