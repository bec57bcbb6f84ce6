//! Per-logger configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LoggerResult;
use crate::logging::LogLevel;

/// Environment variable overriding the threshold (name or number)
pub const LEVEL_ENV: &str = "NANOLOG_LEVEL";

/// Environment variable overriding the timestamp pattern
pub const DATE_FORMAT_ENV: &str = "NANOLOG_DATE_FORMAT";

/// Everything needed to build a `FileLogger`
///
/// # Example
///
/// ```
/// use nanolog_core::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::new("/var/log/myapp")
///     .with_level(LogLevel::Warning)
///     .with_name("http");
/// assert_eq!(config.key(), Some("http"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Existing, writable directory that holds the log file
    pub directory: PathBuf,

    /// Threshold; messages with a numerically greater level are dropped
    #[serde(default = "default_level", deserialize_with = "deserialize_level")]
    pub level: i32,

    /// Registry key; `None` or empty selects the anonymous slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Overrides the date-stamped default file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// strftime pattern for line timestamps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

fn default_level() -> i32 {
    LogLevel::Debug.as_i32()
}

/// Levels may be written as numbers or as level names
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelSpec {
    Number(i32),
    Name(String),
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match LevelSpec::deserialize(deserializer)? {
        LevelSpec::Number(level) => Ok(level),
        LevelSpec::Name(name) => parse_level(&name).map_err(serde::de::Error::custom),
    }
}

/// Parse a threshold from a level name or any integer
pub fn parse_level(value: &str) -> LoggerResult<i32> {
    if let Ok(level) = value.trim().parse::<i32>() {
        return Ok(level);
    }
    value.parse::<LogLevel>().map(i32::from)
}

impl LoggerConfig {
    /// Config for the anonymous logger at DEBUG in `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            level: default_level(),
            name: None,
            file_name: None,
            date_format: None,
        }
    }

    pub fn with_level(mut self, level: impl Into<i32>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    /// Registry key for this config (`None` is the anonymous slot)
    pub fn key(&self) -> Option<&str> {
        normalize_name(self.name.as_deref())
    }

    /// Apply `NANOLOG_LEVEL` and `NANOLOG_DATE_FORMAT` if set
    pub fn with_env_overrides(self) -> LoggerResult<Self> {
        self.with_overrides(
            std::env::var(LEVEL_ENV).ok().as_deref(),
            std::env::var(DATE_FORMAT_ENV).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, level: Option<&str>, date_format: Option<&str>) -> LoggerResult<Self> {
        if let Some(level) = level.filter(|v| !v.trim().is_empty()) {
            self.level = parse_level(level)?;
        }
        if let Some(date_format) = date_format.filter(|v| !v.is_empty()) {
            self.date_format = Some(date_format.to_string());
        }
        Ok(self)
    }

    /// Resolve a relative directory against `base`
    pub(crate) fn resolve_directory(&mut self, base: &Path) {
        if self.directory.is_relative() {
            self.directory = base.join(&self.directory);
        }
    }
}

/// Map an empty name to the anonymous slot
pub(crate) fn normalize_name(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}
