//! A single formatted log entry.

use crate::log_level::LogLevel;
use chrono::Local;
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub(crate) struct LogRecord {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<Arc<str>>,
    pub message: String,
}

impl LogRecord {
    /// Stamps a record with the current local time.
    pub fn now(level: LogLevel, component: Option<Arc<str>>, message: &str) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component,
            message: message.to_string(),
        }
    }

    /// `[timestamp] LEVEL [component]: message` with a trailing newline.
    pub fn line(&self) -> String {
        match self.component.as_deref() {
            Some(component) => format!(
                "[{}] {} [{}]: {}\n",
                self.timestamp,
                self.level.as_str(),
                component,
                self.message
            ),
            None => format!(
                "[{}] {}: {}\n",
                self.timestamp,
                self.level.as_str(),
                self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_without_component() {
        let record = LogRecord::now(LogLevel::Error, None, "Camera unplugged");
        let line = record.line();

        assert!(line.contains("] ERROR: Camera unplugged"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_line_with_component() {
        let record = LogRecord::now(LogLevel::Info, Some(Arc::from("Scanner")), "ready");
        assert!(record.line().contains("INFO [Scanner]: ready"));
    }

    #[test]
    fn test_timestamp_shape() {
        let record = LogRecord::now(LogLevel::Debug, None, "x");

        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(record.timestamp.len(), 23);
        assert_eq!(&record.timestamp[4..5], "-");
        assert_eq!(&record.timestamp[19..20], ".");
    }
}
