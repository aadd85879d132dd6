//! Error types for media operations.
//!
//! Covers camera capture, window display and frame processing.

use std::fmt;

pub type Result<T> = std::result::Result<T, MediaError>;

/// Error type for media operations
#[derive(Debug)]
pub enum MediaError {
    /// Invalid configuration value
    Config(String),
    /// Camera read or release failure
    Camera(String),
    /// Window or keyboard failure
    Display(String),
    /// Frame transformation failure
    Processing(String),
    /// Error raised inside OpenCV
    OpenCv(opencv::Error),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Config(msg) => write!(f, "Config error: {}", msg),
            MediaError::Camera(msg) => write!(f, "Camera error: {}", msg),
            MediaError::Display(msg) => write!(f, "Display error: {}", msg),
            MediaError::Processing(msg) => write!(f, "Processing error: {}", msg),
            MediaError::OpenCv(err) => write!(f, "OpenCV error: {}", err),
        }
    }
}

impl std::error::Error for MediaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MediaError::OpenCv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<opencv::Error> for MediaError {
    fn from(err: opencv::Error) -> Self {
        MediaError::OpenCv(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_camera() {
        let err = MediaError::Camera("Device not found".to_string());
        assert_eq!(err.to_string(), "Camera error: Device not found");
    }

    #[test]
    fn test_error_display_display() {
        let err = MediaError::Display("No window system".to_string());
        assert_eq!(err.to_string(), "Display error: No window system");
    }

    #[test]
    fn test_error_from_opencv() {
        let cv_err = opencv::Error::new(opencv::core::StsBadArg, "bad size");
        let err: MediaError = cv_err.into();

        assert!(matches!(err, MediaError::OpenCv(_)));
        assert!(err.to_string().contains("bad size"));
    }
}
