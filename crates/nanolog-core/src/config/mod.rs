//! Logger configuration
//!
//! - `LoggerConfig`: construction parameters of a single logger
//! - `ConfigFile`: YAML file listing several loggers

mod logger;
mod file;

pub use logger::{parse_level, LoggerConfig, DATE_FORMAT_ENV, LEVEL_ENV};
pub use file::ConfigFile;

pub(crate) use logger::normalize_name;
