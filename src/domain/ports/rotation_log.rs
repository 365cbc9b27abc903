//! Rotation log port
//!
//! Injected logging collaborator, so the orchestrator never reaches for a
//! process-wide logger and its output can be captured in tests.

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

/// Trait for receiving log lines from a rotation run
pub trait RotationLog {
    /// Log a message at the given level.
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl<T: RotationLog + ?Sized> RotationLog for &T {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }
}

/// No-op log for silent operation
pub struct NoopLog;

impl RotationLog for NoopLog {
    fn log(&self, _level: LogLevel, _message: &str) {
        // Do nothing
    }
}
