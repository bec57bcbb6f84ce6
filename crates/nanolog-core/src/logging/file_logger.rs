//! File-backed leveled logger
//!
//! Each `FileLogger` owns one append-mode handle. Every `log` call that passes
//! the threshold formats one line and writes it straight to the file, with no
//! buffering in between.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use super::format::{default_file_name, format_line, validate_date_format, DEFAULT_DATE_FORMAT};
use super::level::LogLevel;
use super::traits::Logger;
use crate::config::{normalize_name, LoggerConfig};
use crate::error::{LoggerError, LoggerResult};

/// Lifecycle of the backing file handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerStatus {
    Open,
    Closed,
}

/// Mutable state, guarded so that check, format and write happen as one step
#[derive(Debug)]
struct FileLoggerState {
    file: Option<File>,
    level: i32,
    date_format: String,
}

/// A named logger appending to a file
///
/// # Example
///
/// ```no_run
/// use nanolog_core::{FileLogger, Logger, LoggerConfig, LogLevel};
///
/// let logger = FileLogger::open(&LoggerConfig::new("/tmp").with_level(LogLevel::Warning))?;
/// logger.warning("Disk space is at 90%");
/// logger.debug("dropped, below the threshold");
/// # Ok::<(), nanolog_core::LoggerError>(())
/// ```
#[derive(Debug)]
pub struct FileLogger {
    name: Option<String>,
    file_path: PathBuf,
    state: Mutex<FileLoggerState>,
}

impl FileLogger {
    /// Open a logger described by `config`
    ///
    /// Fails without side effects other than possibly creating the log file.
    pub fn open(config: &LoggerConfig) -> LoggerResult<Self> {
        check_directory(&config.directory)?;

        let date_format = config
            .date_format
            .clone()
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
        validate_date_format(&date_format)?;

        let name = normalize_name(config.name.as_deref()).map(str::to_string);
        let file_name = match config.file_name.as_deref().filter(|f| !f.is_empty()) {
            Some(file_name) => check_file_name(file_name)?.to_string(),
            None => default_file_name(name.as_deref(), Local::now().date_naive()),
        };
        let file_path = config.directory.join(file_name);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .map_err(|e| LoggerError::file_open(&file_path, e))?;

        Ok(Self {
            name,
            file_path,
            state: Mutex::new(FileLoggerState {
                file: Some(file),
                level: config.level,
                date_format,
            }),
        })
    }

    /// Name of the logger, `None` for the anonymous one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Current threshold
    pub fn level(&self) -> i32 {
        self.state.lock().level
    }

    /// Replace the threshold for subsequent calls
    ///
    /// Values outside CRITICAL..=DEBUG are accepted: anything above DEBUG lets
    /// every message through, anything below CRITICAL drops everything.
    pub fn set_level(&self, level: impl Into<i32>) {
        self.state.lock().level = level.into();
    }

    pub fn date_format(&self) -> String {
        self.state.lock().date_format.clone()
    }

    /// Replace the timestamp pattern for subsequent calls
    ///
    /// An unrenderable pattern is rejected and the previous one kept.
    pub fn set_date_format(&self, format: impl Into<String>) -> LoggerResult<()> {
        let format = format.into();
        validate_date_format(&format)?;
        self.state.lock().date_format = format;
        Ok(())
    }

    pub fn status(&self) -> LoggerStatus {
        if self.state.lock().file.is_some() {
            LoggerStatus::Open
        } else {
            LoggerStatus::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.status() == LoggerStatus::Open
    }

    /// Release the file handle; later writes report failure
    ///
    /// Closing twice is a no-op. Dropping the logger closes it as well.
    pub fn close(&self) {
        self.state.lock().file.take();
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str, level: LogLevel) -> bool {
        let mut state = self.state.lock();
        if !level.passes(state.level) {
            return true;
        }

        let Some(line) = format_line(&Local::now(), &state.date_format, level, message) else {
            return false;
        };

        match state.file.as_mut() {
            Some(file) => file.write_all(line.as_bytes()).is_ok(),
            None => false,
        }
    }
}

/// Directory must exist and be writable by this process
fn check_directory(directory: &Path) -> LoggerResult<()> {
    let is_dir = fs::metadata(directory).map(|meta| meta.is_dir()).unwrap_or(false);

    if !is_dir || !is_writable(directory) {
        return Err(LoggerError::invalid_directory(directory));
    }
    Ok(())
}

#[cfg(unix)]
fn is_writable(directory: &Path) -> bool {
    use nix::unistd::{access, AccessFlags};

    access(directory, AccessFlags::W_OK).is_ok()
}

/// No access(2) here: create and remove a scratch file instead
#[cfg(not(unix))]
fn is_writable(directory: &Path) -> bool {
    let scratch = directory.join(format!(".nanolog-write-check-{}", std::process::id()));
    match OpenOptions::new().write(true).create_new(true).open(&scratch) {
        Ok(file) => {
            drop(file);
            let _ = fs::remove_file(&scratch);
            true
        }
        Err(_) => false,
    }
}

/// File name must stay below the log directory
fn check_file_name(file_name: &str) -> LoggerResult<&str> {
    let contained = Path::new(file_name)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if !contained {
        return Err(LoggerError::InvalidFileName(file_name.to_string()));
    }
    Ok(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDateTime;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Checks `<timestamp> <LEVEL> <message>` with the default pattern
    fn assert_well_formed(line: &str, level: LogLevel, message: &str) {
        let (stamp, rest) = line.split_at(19);
        assert!(
            NaiveDateTime::parse_from_str(stamp, DEFAULT_DATE_FORMAT).is_ok(),
            "bad timestamp in {:?}",
            line
        );
        assert_eq!(rest, format!(" {} {}", level, message));
    }

    #[test]
    fn test_open_anonymous_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let before = Local::now().date_naive();
        let logger = FileLogger::open(&LoggerConfig::new(dir.path())).unwrap();
        let after = Local::now().date_naive();

        let path = logger.file_path();
        assert!(
            path == dir.path().join(default_file_name(None, before))
                || path == dir.path().join(default_file_name(None, after)),
            "unexpected path {:?}",
            path
        );
        assert!(logger.file_path().exists());
        assert_eq!(logger.name(), None);
        assert_eq!(logger.level(), LogLevel::Debug.as_i32());
        assert_eq!(logger.status(), LoggerStatus::Open);
    }

    #[test]
    fn test_open_named_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let before = Local::now().date_naive();
        let logger = FileLogger::open(&LoggerConfig::new(dir.path()).with_name("app")).unwrap();
        let after = Local::now().date_naive();

        let path = logger.file_path();
        assert!(
            path == dir.path().join(default_file_name(Some("app"), before))
                || path == dir.path().join(default_file_name(Some("app"), after)),
            "unexpected path {:?}",
            path
        );
        assert_eq!(logger.name(), Some("app"));
    }

    #[test]
    fn test_open_with_file_name_override() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig::new(dir.path()).with_name("app").with_file_name("custom.log");
        let logger = FileLogger::open(&config).unwrap();
        assert_eq!(logger.file_path(), dir.path().join("custom.log"));
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.log");
        fs::write(&path, "earlier line\n").unwrap();

        let logger = FileLogger::open(&LoggerConfig::new(dir.path()).with_file_name("existing.log")).unwrap();
        assert!(logger.info("later line"));

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "earlier line");
        assert_well_formed(&lines[1], LogLevel::Info, "later line");
    }

    #[test]
    fn test_missing_directory() {
        let err = FileLogger::open(&LoggerConfig::new("/xpto/foo")).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidDirectory(_)));
    }

    #[test]
    fn test_directory_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, "").unwrap();

        let err = FileLogger::open(&LoggerConfig::new(&file)).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidDirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_directory_follows_process_access() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores the mode bits, everyone else is refused
        let scratch = dir.path().join("write_check");
        let can_write = fs::write(&scratch, "").is_ok();
        let _ = fs::remove_file(&scratch);

        let result = FileLogger::open(&LoggerConfig::new(dir.path()));

        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
        if can_write {
            assert!(result.is_ok(), "writable directory refused: {:?}", result.err());
        } else {
            assert!(matches!(result, Err(LoggerError::InvalidDirectory(_))));
        }
    }

    #[test]
    fn test_file_name_cannot_leave_directory() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        let escaped = other.path().join("escaped.log");

        for file_name in [escaped.to_str().unwrap(), "../escaped.log", "logs/../../escaped.log"] {
            let config = LoggerConfig::new(dir.path()).with_file_name(file_name);
            assert!(
                matches!(FileLogger::open(&config), Err(LoggerError::InvalidFileName(_))),
                "accepted {:?}",
                file_name
            );
        }
        assert!(!escaped.exists());
        assert!(!dir.path().parent().unwrap().join("escaped.log").exists());
    }

    #[test]
    fn test_nested_file_name_stays_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let logger = FileLogger::open(&LoggerConfig::new(dir.path()).with_file_name("./sub/app.log")).unwrap();
        assert!(logger.file_path().starts_with(dir.path()));
        assert!(dir.path().join("sub").join("app.log").exists());
    }

    #[test]
    fn test_open_failure_on_missing_path_component() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig::new(dir.path()).with_file_name("missing/sub.log");

        let err = FileLogger::open(&config).unwrap_err();
        match err {
            LoggerError::FileOpen { path, .. } => assert_eq!(path, dir.path().join("missing/sub.log")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date_format_rejected_at_open() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig::new(dir.path()).with_date_format("%Q");
        assert!(matches!(
            FileLogger::open(&config),
            Err(LoggerError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_threshold_filters_lower_priority() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::open(&LoggerConfig::new(dir.path()).with_level(LogLevel::Warning)).unwrap();

        // Filtered calls still report success
        assert!(logger.debug("debug message"));
        assert!(logger.info("info message"));
        assert!(logger.warning("warning message"));
        assert!(logger.error("error message"));
        assert!(logger.critical("critical message"));

        let lines = read_lines(logger.file_path());
        assert_eq!(lines.len(), 3);
        assert_well_formed(&lines[0], LogLevel::Warning, "warning message");
        assert_well_formed(&lines[1], LogLevel::Error, "error message");
        assert_well_formed(&lines[2], LogLevel::Critical, "critical message");
    }

    #[test]
    fn test_every_level_name_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::open(&LoggerConfig::new(dir.path())).unwrap();
        for level in LogLevel::ALL {
            assert!(logger.log("msg", level));
        }

        let lines = read_lines(logger.file_path());
        assert_eq!(lines.len(), 5);
        for (line, level) in lines.iter().zip(LogLevel::ALL) {
            assert_well_formed(line, level, "msg");
        }
    }

    #[test]
    fn test_set_level_is_not_retroactive() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::open(&LoggerConfig::new(dir.path())).unwrap();

        logger.debug("before");
        logger.set_level(LogLevel::Error);
        assert_eq!(logger.level(), 1);
        logger.debug("after");
        logger.error("after error");

        let lines = read_lines(logger.file_path());
        assert_eq!(lines.len(), 2);
        assert_well_formed(&lines[0], LogLevel::Debug, "before");
        assert_well_formed(&lines[1], LogLevel::Error, "after error");
    }

    #[test]
    fn test_out_of_range_levels() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::open(&LoggerConfig::new(dir.path()).with_level(-1)).unwrap();
        logger.critical("dropped");
        assert!(read_lines(logger.file_path()).is_empty());

        logger.set_level(99);
        logger.debug("kept");
        assert_eq!(read_lines(logger.file_path()).len(), 1);
    }

    #[test]
    fn test_custom_date_format() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig::new(dir.path()).with_date_format("[%Y]");
        let logger = FileLogger::open(&config).unwrap();

        logger.info("first");
        logger.set_date_format("%H:%M:%S").unwrap();
        assert_eq!(logger.date_format(), "%H:%M:%S");
        logger.info("second");

        let lines = read_lines(logger.file_path());
        let year = Local::now().format("[%Y]").to_string();
        assert!(lines[0].starts_with(&year));
        assert!(lines[0].ends_with(" INFO first"));
        assert!(!lines[1].starts_with('['));
        assert!(lines[1].ends_with(" INFO second"));
    }

    #[test]
    fn test_set_invalid_date_format_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::open(&LoggerConfig::new(dir.path())).unwrap();

        assert!(logger.set_date_format("%Q").is_err());
        assert_eq!(logger.date_format(), DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_close() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::open(&LoggerConfig::new(dir.path())).unwrap();

        assert!(logger.info("open"));
        logger.close();
        assert_eq!(logger.status(), LoggerStatus::Closed);
        assert!(!logger.is_open());
        assert!(!logger.info("closed"));

        // Filtering still wins over a closed handle
        logger.set_level(LogLevel::Critical);
        assert!(logger.debug("filtered"));

        logger.close();
        assert_eq!(read_lines(logger.file_path()).len(), 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_reports_false() {
        if !Path::new("/dev/full").exists() {
            return;
        }
        let config = LoggerConfig::new("/dev").with_file_name("full");
        let Ok(logger) = FileLogger::open(&config) else {
            return;
        };
        assert!(!logger.critical("no space left"));
    }

    #[test]
    fn test_concurrent_writes_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Arc::new(FileLogger::open(&LoggerConfig::new(dir.path())).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        assert!(logger.info(&format!("thread {} line {}", t, i)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = read_lines(logger.file_path());
        assert_eq!(lines.len(), 400);
        for line in &lines {
            assert!(line[19..].starts_with(" INFO thread "), "mangled line {:?}", line);
        }
    }
}
