//! YAML configuration file listing loggers
//!
//! ```yaml
//! loggers:
//!   - directory: /var/log/myapp
//!     level: warning
//!     name: http
//!   - directory: logs            # relative to the config file
//!     level: 4
//!     file_name: app.log
//!     date_format: "%d/%m/%Y %H:%M"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::logger::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Loggers to create, in order
    #[serde(default)]
    pub loggers: Vec<LoggerConfig>,
}

impl ConfigFile {
    /// Parse a config from YAML text
    ///
    /// Relative directories are kept as written.
    pub fn from_yaml_str(content: &str) -> LoggerResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LoggerError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load config from file
    ///
    /// Relative logger directories are resolved against the directory that
    /// contains the config file.
    pub fn load(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;

        if let Some(base) = path.parent() {
            for logger in &mut config.loggers {
                logger.resolve_directory(base);
            }
        }

        Ok(config)
    }

    /// Serialize to YAML text
    pub fn to_yaml_string(&self) -> LoggerResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LoggerError::Config(format!("Failed to serialize YAML: {}", e)))
    }

    /// Save config to file
    pub fn save(&self, path: impl AsRef<Path>) -> LoggerResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }
}
