//! Error types for depth estimation.

use media::MediaError;
use std::fmt;

pub type Result<T> = std::result::Result<T, DepthError>;

/// Error type for depth estimation
#[derive(Debug)]
pub enum DepthError {
    /// Unknown estimation mode label
    UnknownMode(String),
    /// Unknown colormap label
    UnknownColormap(String),
    /// Unknown compute device label
    UnknownDevice(String),
    /// Model file missing or unloadable
    Model(String),
    /// Network output had an unexpected shape or the input was unusable
    Inference(String),
    /// Frame handling failure
    Media(MediaError),
    /// Error raised inside OpenCV
    OpenCv(opencv::Error),
}

impl fmt::Display for DepthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthError::UnknownMode(label) => write!(
                f,
                "Unknown estimation mode '{}' (expected standard, live, hybrid or large)",
                label
            ),
            DepthError::UnknownColormap(label) => write!(f, "Unknown colormap '{}'", label),
            DepthError::UnknownDevice(label) => write!(
                f,
                "Unknown compute device '{}' (expected auto, cpu, cuda or opencl)",
                label
            ),
            DepthError::Model(msg) => write!(f, "Model error: {}", msg),
            DepthError::Inference(msg) => write!(f, "Inference error: {}", msg),
            DepthError::Media(err) => write!(f, "{}", err),
            DepthError::OpenCv(err) => write!(f, "OpenCV error: {}", err),
        }
    }
}

impl std::error::Error for DepthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DepthError::Media(err) => Some(err),
            DepthError::OpenCv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<opencv::Error> for DepthError {
    fn from(err: opencv::Error) -> Self {
        DepthError::OpenCv(err)
    }
}

impl From<MediaError> for DepthError {
    fn from(err: MediaError) -> Self {
        DepthError::Media(err)
    }
}
