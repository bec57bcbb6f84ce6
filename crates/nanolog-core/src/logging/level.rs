//! Severity levels

use std::str::FromStr;

use crate::error::LoggerError;

/// Log levels, lower is more severe
///
/// A logger with threshold `n` writes every message whose level is `<= n`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Critical = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    #[default]
    Debug = 4,
}

impl LogLevel {
    /// All levels, most severe first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Literal name written into log lines
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Create from a numeric level (returns None outside 0..=4)
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Critical),
            1 => Some(LogLevel::Error),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Whether a message at this level passes the given threshold
    #[inline]
    pub fn passes(self, threshold: i32) -> bool {
        self.as_i32() <= threshold
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level.as_i32()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(LogLevel::Critical),
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => other
                .parse::<i32>()
                .ok()
                .and_then(LogLevel::from_i32)
                .ok_or_else(|| LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
