//! Cloneable, non-blocking logger.
//!
//! A [`Logger`] filters by level, optionally echoes to the console, and hands
//! file output to a writer thread. Component loggers derived with
//! [`Logger::for_component`] share that thread.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_record::LogRecord;
use crate::log_writer::{WriterHandle, spawn_writer};
use std::path::Path;
use std::sync::Arc;

/// Thread-safe logger handle.
///
/// # Examples
///
/// ```no_run
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::new("depthscan.log".as_ref(), LogLevel::Info).unwrap();
/// let camera = logger.for_component("Camera");
/// camera.info("Opened device 0");
///
/// // Before exit, so nothing queued is lost
/// logger.shutdown();
/// ```
#[derive(Clone)]
pub struct Logger {
    /// Shared by all clones; the last one dropped stops the writer thread
    writer: Option<Arc<WriterHandle>>,
    level: LogLevel,
    component: Option<Arc<str>>,
    console_output: bool,
}

impl Logger {
    /// File-only logger writing to `log_path` (created or appended).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(log_path: &Path, level: LogLevel) -> Result<Self> {
        Self::with_sinks(Some(log_path), level, false)
    }

    /// Console-only logger; never touches the file system.
    pub fn console(level: LogLevel) -> Self {
        Self {
            writer: None,
            level,
            component: None,
            console_output: true,
        }
    }

    /// Logger with an optional file sink and optional console echo.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_path` is given and cannot be opened.
    pub fn with_sinks(log_path: Option<&Path>, level: LogLevel, console_output: bool) -> Result<Self> {
        let writer = match log_path {
            Some(path) => Some(Arc::new(spawn_writer(path)?)),
            None => None,
        };
        Ok(Self {
            writer,
            level,
            component: None,
            console_output,
        })
    }

    /// Derives a logger tagged with `component` that shares this logger's
    /// sinks and level.
    pub fn for_component(&self, component: &str) -> Self {
        Self {
            writer: self.writer.clone(),
            level: self.level,
            component: Some(Arc::from(component)),
            console_output: self.console_output,
        }
    }

    /// Writes every queued record to the log file and stops the writer
    /// thread. Affects all clones; records logged afterwards reach the
    /// console only.
    pub fn shutdown(&self) {
        if let Some(writer) = &self.writer {
            writer.shutdown();
        }
    }

    /// Minimum level this logger records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let record = LogRecord::now(level, self.component.clone(), message);

        if self.console_output {
            if level.is_diagnostic() {
                eprint!("{}", record.line());
            } else {
                print!("{}", record.line());
            }
        }

        if let Some(writer) = &self.writer {
            writer.send(record);
        }
    }
}
