//! Error types for the scanner.

use config_loader::ConfigError;
use depth::DepthError;
use logging::LoggingError;
use media::MediaError;
use std::fmt;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Error type for scanner construction and streaming
#[derive(Debug)]
pub enum ScanError {
    /// Camera, window or frame failure
    Media(MediaError),
    /// Depth estimation failure
    Depth(DepthError),
    /// Configuration failure
    Config(ConfigError),
    /// Logger setup failure
    Logging(LoggingError),
    /// Display scale that is not a positive finite number
    InvalidScale(f64),
    /// The camera handle was released by an earlier run
    Released,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Media(err) => write!(f, "{}", err),
            ScanError::Depth(err) => write!(f, "{}", err),
            ScanError::Config(err) => write!(f, "{}", err),
            ScanError::Logging(err) => write!(f, "{}", err),
            ScanError::InvalidScale(value) => {
                write!(f, "Display scale must be a positive number, got {}", value)
            }
            ScanError::Released => write!(f, "Camera handle already released"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Media(err) => Some(err),
            ScanError::Depth(err) => Some(err),
            ScanError::Config(err) => Some(err),
            ScanError::Logging(err) => Some(err),
            ScanError::InvalidScale(_) | ScanError::Released => None,
        }
    }
}

impl From<MediaError> for ScanError {
    fn from(err: MediaError) -> Self {
        ScanError::Media(err)
    }
}

impl From<DepthError> for ScanError {
    fn from(err: DepthError) -> Self {
        ScanError::Depth(err)
    }
}

impl From<ConfigError> for ScanError {
    fn from(err: ConfigError) -> Self {
        ScanError::Config(err)
    }
}

impl From<LoggingError> for ScanError {
    fn from(err: LoggingError) -> Self {
        ScanError::Logging(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_scale_display() {
        assert_eq!(
            ScanError::InvalidScale(-2.0).to_string(),
            "Display scale must be a positive number, got -2"
        );
    }

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let err: ScanError = MediaError::Camera("Empty or invalid frame".to_string()).into();
        assert_eq!(err.to_string(), "Camera error: Empty or invalid frame");

        let err: ScanError = DepthError::UnknownColormap("sepia".to_string()).into();
        assert!(err.to_string().contains("sepia"));
    }
}
