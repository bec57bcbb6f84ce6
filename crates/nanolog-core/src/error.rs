//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building loggers or loading their configuration
///
/// Write failures are not represented here: `log` calls report them as `false`.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Log directory is missing, not a directory, or not writable
    #[error("Directory does not exist, or is not writable: {}", .0.display())]
    InvalidDirectory(PathBuf),

    /// The backing log file could not be opened for appending
    #[error("Error opening log file with path {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File name that would place the log file outside its directory
    #[error("Invalid log file name: {0:?}")]
    InvalidFileName(String),

    /// Timestamp pattern chrono cannot render
    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// Unknown level name
    #[error("Invalid log level: {0:?}")]
    InvalidLevel(String),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoggerError {
    /// Create a file open error
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid directory error
    pub fn invalid_directory(path: impl Into<PathBuf>) -> Self {
        Self::InvalidDirectory(path.into())
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
