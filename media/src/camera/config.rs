//! Camera configuration types.
//!
//! Device selection plus an optional capture resolution request.

use crate::constants::resolution::{MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{MediaError, Result};

/// Camera capture configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CameraConfig {
    /// Camera device index (0 for the default camera)
    pub device_id: i32,
    /// Requested frame width (None = device default)
    pub width: Option<u32>,
    /// Requested frame height (None = device default)
    pub height: Option<u32>,
}

impl CameraConfig {
    /// Configuration for `device_id` at the device's default resolution.
    ///
    /// The index is not checked here; an unusable index shows up as a failed
    /// read once capture starts.
    pub fn new(device_id: i32) -> Self {
        Self {
            device_id,
            width: None,
            height: None,
        }
    }

    /// Requests a capture resolution.
    ///
    /// # Returns
    /// * `Err(MediaError::Config)` - If either dimension is outside 1..=7680
    pub fn with_resolution(mut self, width: u32, height: u32) -> Result<Self> {
        Self::check_dimension("Width", width)?;
        Self::check_dimension("Height", height)?;

        self.width = Some(width);
        self.height = Some(height);
        Ok(self)
    }

    /// The requested resolution, if both dimensions were given
    pub fn resolution(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    fn check_dimension(name: &str, value: u32) -> Result<()> {
        if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
            Ok(())
        } else {
            Err(MediaError::Config(format!(
                "{} must be between {} and {}, got {}",
                name, MIN_DIMENSION, MAX_DIMENSION, value
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CameraConfig::default();
        assert_eq!(config.device_id, 0);
        assert_eq!(config.resolution(), None);
    }

    #[test]
    fn test_negative_index_is_accepted() {
        let config = CameraConfig::new(-1);
        assert_eq!(config.device_id, -1);
    }

    #[test]
    fn test_config_with_resolution() {
        let config = CameraConfig::new(2).with_resolution(1280, 720).unwrap();
        assert_eq!(config.device_id, 2);
        assert_eq!(config.resolution(), Some((1280, 720)));
    }

    #[test]
    fn test_invalid_width() {
        let result = CameraConfig::new(0).with_resolution(0, 480);
        assert!(matches!(result, Err(MediaError::Config(_))));
    }

    #[test]
    fn test_invalid_height_too_large() {
        let result = CameraConfig::new(0).with_resolution(640, 10000);
        assert!(matches!(result, Err(MediaError::Config(_))));
    }

    #[test]
    fn test_resolution_edges() {
        let config = CameraConfig::new(0).with_resolution(1, 7680).unwrap();
        assert_eq!(config.resolution(), Some((1, 7680)));
    }
}
