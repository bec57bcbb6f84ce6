//! Line and file name formatting

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate};

use super::level::LogLevel;
use crate::error::{LoggerError, LoggerResult};

/// Timestamp pattern used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date pattern used in default file names
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reject strftime patterns chrono would fail to render
pub fn validate_date_format(format: &str) -> LoggerResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LoggerError::InvalidDateFormat(format.to_string()));
    }
    Ok(())
}

/// Format one log line: `<timestamp> <LEVEL> <message>\n`
///
/// Returns `None` if the timestamp cannot be rendered with `date_format`.
pub fn format_line(
    timestamp: &DateTime<Local>,
    date_format: &str,
    level: LogLevel,
    message: &str,
) -> Option<String> {
    let mut line = String::with_capacity(date_format.len() + message.len() + 16);
    writeln!(
        line,
        "{} {} {}",
        timestamp.format(date_format),
        level.as_str(),
        message
    )
    .ok()?;
    Some(line)
}

/// Default file name for a logger created on `date`
///
/// Named loggers get `<name>_<date>.log`, the anonymous one `<date>.log`.
pub fn default_file_name(name: Option<&str>, date: NaiveDate) -> String {
    let date = date.format(FILE_DATE_FORMAT);
    match name {
        Some(name) => format!("{}_{}.log", name, date),
        None => format!("{}.log", date),
    }
}
