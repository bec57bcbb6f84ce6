//! No-op logger implementation

use super::level::LogLevel;
use super::traits::Logger;

/// A logger that does nothing
///
/// Used as the default diagnostics sink of `LoggerRegistry`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _message: &str, _level: LogLevel) -> bool {
        true
    }
}
