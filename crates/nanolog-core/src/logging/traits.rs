//! Logger trait definition

use std::sync::Arc;

use super::level::LogLevel;

/// Leveled logging abstraction
///
/// Implementations:
/// - `FileLogger`: Appends to a file on disk
/// - `ConsoleLogger`: Writes to stderr
/// - `NoOpLogger`: Silent logger for testing
///
/// Every call returns `true` when the message was written or deliberately
/// filtered out, and `false` when the write failed. Logging never panics.
pub trait Logger: Send + Sync {
    /// Write a message at the given level
    fn log(&self, message: &str, level: LogLevel) -> bool;

    /// Log a critical message
    fn critical(&self, message: &str) -> bool {
        self.log(message, LogLevel::Critical)
    }

    /// Log an error message
    fn error(&self, message: &str) -> bool {
        self.log(message, LogLevel::Error)
    }

    /// Log a warning message
    fn warning(&self, message: &str) -> bool {
        self.log(message, LogLevel::Warning)
    }

    /// Log an info message
    fn info(&self, message: &str) -> bool {
        self.log(message, LogLevel::Info)
    }

    /// Log a debug message
    fn debug(&self, message: &str) -> bool {
        self.log(message, LogLevel::Debug)
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    fn log_fmt(&self, level: LogLevel, args: std::fmt::Arguments<'_>) -> bool {
        match args.as_str() {
            Some(message) => self.log(message, level),
            None => self.log(&args.to_string(), level),
        }
    }

    /// Log a critical message with format arguments
    fn critical_fmt(&self, args: std::fmt::Arguments<'_>) -> bool {
        self.log_fmt(LogLevel::Critical, args)
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: std::fmt::Arguments<'_>) -> bool {
        self.log_fmt(LogLevel::Error, args)
    }

    /// Log a warning message with format arguments
    fn warning_fmt(&self, args: std::fmt::Arguments<'_>) -> bool {
        self.log_fmt(LogLevel::Warning, args)
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) -> bool {
        self.log_fmt(LogLevel::Info, args)
    }

    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) -> bool {
        self.log_fmt(LogLevel::Debug, args)
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.critical(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.error(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.warning(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.info(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::Logger as _;
            $logger.debug(&format!($($arg)*))
        }
    };
}
