//! Leveled logging
//!
//! `Logger` is the trait every sink implements; `FileLogger` is the one that
//! appends to disk.

mod traits;
mod level;
mod format;
mod noop;
mod console;
mod file_logger;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use level::LogLevel;
pub use format::{default_file_name, format_line, validate_date_format, DEFAULT_DATE_FORMAT};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use file_logger::{FileLogger, LoggerStatus};
