//! Nanolog Core
//!
//! A small leveled file logger. Callers create named loggers through a
//! `LoggerRegistry`; each logger owns one append-mode file and writes one
//! timestamped line per call:
//!
//! ```text
//! 2024-03-09 14:05:07 CRITICAL Disk is full
//! ```
//!
//! Levels run from `CRITICAL` (0) to `DEBUG` (4). A logger drops every message
//! whose level is numerically greater than its threshold.
//!
//! ```rust,no_run
//! use nanolog_core::{Logger, LoggerConfig, LoggerRegistry, LogLevel};
//!
//! let registry = LoggerRegistry::new();
//! let log = registry
//!     .create(&LoggerConfig::new("/tmp").with_level(LogLevel::Warning))?
//!     .expect("anonymous slot is free");
//!
//! log.warning("Disk space is at 90%");
//! log.debug("not written");
//!
//! // Later, anywhere the registry is reachable
//! let same = registry.get_instance(None).unwrap();
//! same.error("Could not write message");
//! # Ok::<(), nanolog_core::LoggerError>(())
//! ```

pub mod error;
pub mod logging;
pub mod config;
pub mod registry;

pub use error::{LoggerError, LoggerResult};

pub use logging::{
    ConsoleLogger, FileLogger, LogLevel, Logger, LoggerExt, LoggerStatus, NoOpLogger,
    SharedLogger,
};

pub use config::{ConfigFile, LoggerConfig};

pub use registry::{global_registry, LoggerRegistry};
