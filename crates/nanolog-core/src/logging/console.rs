//! Console logger implementation

use std::io::Write;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Local;

use super::format::{format_line, DEFAULT_DATE_FORMAT};
use super::level::LogLevel;
use super::traits::Logger;

/// A logger that writes to stderr using the same line format as `FileLogger`
#[derive(Debug)]
pub struct ConsoleLogger {
    level: AtomicI32,
    date_format: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger that lets every level through
    pub fn new() -> Self {
        Self::with_level(LogLevel::Debug)
    }

    /// Create a console logger with a threshold
    pub fn with_level(level: impl Into<i32>) -> Self {
        Self {
            level: AtomicI32::new(level.into()),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn level(&self) -> i32 {
        self.level.load(Ordering::Relaxed)
    }

    pub fn set_level(&self, level: impl Into<i32>) {
        self.level.store(level.into(), Ordering::Relaxed);
    }

    fn write_to<W: Write>(&self, out: &mut W, message: &str, level: LogLevel) -> bool {
        if !level.passes(self.level()) {
            return true;
        }
        let Some(line) = format_line(&Local::now(), &self.date_format, level, message) else {
            return false;
        };
        out.write_all(line.as_bytes()).is_ok()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str, level: LogLevel) -> bool {
        self.write_to(&mut std::io::stderr().lock(), message, level)
    }
}
