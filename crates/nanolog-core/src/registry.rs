//! Logger registry
//!
//! Holds at most one `FileLogger` per name, plus one anonymous logger. The
//! registry refuses to create a logger for a name that is already taken rather
//! than handing back the existing one; use `get_instance` for lookups.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::config::{normalize_name, ConfigFile, LoggerConfig};
use crate::error::LoggerResult;
use crate::logging::{FileLogger, Logger, NoOpLogger, SharedLogger};

/// Registry of live loggers keyed by name (`None` is the anonymous slot)
pub struct LoggerRegistry {
    instances: Mutex<HashMap<Option<String>, Arc<FileLogger>>>,
    /// Receives the registry's own diagnostics
    diagnostics: SharedLogger,
}

impl LoggerRegistry {
    /// Create an empty registry with silent diagnostics
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(NoOpLogger::new()))
    }

    /// Create an empty registry reporting to `diagnostics`
    pub fn with_diagnostics(diagnostics: SharedLogger) -> Self {
        Self {
            instances: Mutex::new(HashMap::new()),
            diagnostics,
        }
    }

    /// Create and register a logger
    ///
    /// Returns `Ok(None)` when a logger is already registered under the same
    /// name (or when the anonymous slot is taken). Construction errors are
    /// returned as-is and leave the registry untouched.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nanolog_core::{Logger, LoggerConfig, LoggerRegistry, LogLevel};
    ///
    /// let registry = LoggerRegistry::new();
    /// let config = LoggerConfig::new("/tmp").with_name("http").with_level(LogLevel::Info);
    ///
    /// let logger = registry.create(&config)?.expect("name is free");
    /// logger.info("listening");
    ///
    /// assert!(registry.create(&config)?.is_none());
    /// # Ok::<(), nanolog_core::LoggerError>(())
    /// ```
    pub fn create(&self, config: &LoggerConfig) -> LoggerResult<Option<Arc<FileLogger>>> {
        let key = config.key().map(str::to_string);

        // Held across open + insert so racing creates yield one logger
        let mut instances = self.instances.lock();
        if instances.contains_key(&key) {
            self.diagnostics.warning(&format!(
                "[LoggerRegistry] Logger {} already exists, not created",
                describe(key.as_deref())
            ));
            return Ok(None);
        }

        let logger = match FileLogger::open(config) {
            Ok(logger) => Arc::new(logger),
            Err(e) => {
                self.diagnostics.error(&format!(
                    "[LoggerRegistry] Failed to create logger {}: {}",
                    describe(key.as_deref()),
                    e
                ));
                return Err(e);
            }
        };

        self.diagnostics.info(&format!(
            "[LoggerRegistry] Created logger {} at {}",
            describe(key.as_deref()),
            logger.file_path().display()
        ));
        instances.insert(key, Arc::clone(&logger));

        Ok(Some(logger))
    }

    /// Create every logger in `configs`, skipping names already taken
    ///
    /// Stops at the first construction error; loggers created before it stay
    /// registered.
    pub fn create_all<'a, I>(&self, configs: I) -> LoggerResult<Vec<Arc<FileLogger>>>
    where
        I: IntoIterator<Item = &'a LoggerConfig>,
    {
        let mut created = Vec::new();
        for config in configs {
            if let Some(logger) = self.create(config)? {
                created.push(logger);
            }
        }
        Ok(created)
    }

    /// Load a YAML config file and create the loggers it lists
    pub fn create_from_file(&self, path: impl AsRef<Path>) -> LoggerResult<Vec<Arc<FileLogger>>> {
        let config = ConfigFile::load(path)?;
        self.create_all(&config.loggers)
    }

    /// Look up a logger by name; `None` or empty selects the anonymous logger
    pub fn get_instance(&self, name: Option<&str>) -> Option<Arc<FileLogger>> {
        let key = normalize_name(name).map(str::to_string);
        self.instances.lock().get(&key).cloned()
    }

    /// Check if a logger is registered under `name`
    pub fn contains(&self, name: Option<&str>) -> bool {
        let key = normalize_name(name).map(str::to_string);
        self.instances.lock().contains_key(&key)
    }

    /// List all registered names, the anonymous logger first
    pub fn names(&self) -> Vec<Option<String>> {
        let mut names: Vec<_> = self.instances.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.instances.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.lock().is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("names", &self.names())
            .finish()
    }
}

fn describe(key: Option<&str>) -> String {
    match key {
        Some(name) => format!("'{}'", name),
        None => "<anonymous>".to_string(),
    }
}

// Process-wide registry for applications without a composition root
static GLOBAL_REGISTRY: Lazy<LoggerRegistry> = Lazy::new(LoggerRegistry::new);

/// The process-wide registry
///
/// Prefer owning a `LoggerRegistry` and passing it around; this exists for
/// code that cannot.
pub fn global_registry() -> &'static LoggerRegistry {
    &GLOBAL_REGISTRY
}
