use std::fmt;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while locating, reading or parsing a configuration file.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// No file at the given path, or none in any searched location.
    FileNotFound(String),

    /// The file exists but could not be read.
    ReadError(String),

    /// A line is not of the form `key=value`.
    Parse { line: usize, message: String },

    /// A key carried a value of the wrong shape.
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(what) => {
                write!(f, "Configuration file not found: {}", what)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read configuration file: {}", msg)
            }
            ConfigError::Parse { line, message } => {
                write!(f, "Configuration line {}: {}", line, message)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
