//! Camera device handle.
//!
//! Opens an OpenCV capture device by index, reads frames, and releases the
//! hardware exactly once.

use crate::constants::CAMERA_LOG_INTERVAL;
use crate::error::{MediaError, Result};
use crate::frame::VideoFrame;
use crate::traits::FrameSource;
use logging::Logger;
use opencv::prelude::*;
use opencv::videoio::{CAP_ANY, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture};

use super::config::CameraConfig;

/// Video capture device
///
/// Owns an OpenCV `VideoCapture`. The handle is released by
/// [`FrameSource::release`] or, failing that, on drop.
pub struct Camera {
    capture: VideoCapture,
    config: CameraConfig,
    logger: Logger,
    frame_count: u64,
    released: bool,
}

impl Camera {
    /// Opens the device named by `config`.
    ///
    /// A device that does not open is only reported as a warning: the handle
    /// is still returned and its first read fails.
    ///
    /// # Returns
    /// * `Err(MediaError)` - If OpenCV cannot construct a capture object at all
    pub fn open(config: CameraConfig, logger: Logger) -> Result<Self> {
        logger.info(&format!("Opening camera {}", config.device_id));

        let mut capture = VideoCapture::new(config.device_id, CAP_ANY)
            .map_err(|e| MediaError::Camera(format!("Failed to create capture: {}", e)))?;

        if capture.is_opened().unwrap_or(false) {
            Self::apply_resolution(&mut capture, &config, &logger);
        } else {
            logger.warn(&format!(
                "Camera {} is not available; frame reads will fail",
                config.device_id
            ));
        }

        Ok(Camera {
            capture,
            config,
            logger,
            frame_count: 0,
            released: false,
        })
    }

    /// Requests the configured resolution and warns when the device picks
    /// something else.
    fn apply_resolution(capture: &mut VideoCapture, config: &CameraConfig, logger: &Logger) {
        let Some((width, height)) = config.resolution() else {
            return;
        };

        let requests = [
            ("width", CAP_PROP_FRAME_WIDTH, width),
            ("height", CAP_PROP_FRAME_HEIGHT, height),
        ];
        for (name, property, value) in requests {
            let outcome = capture.set(property, f64::from(value));
            if let Some(warning) = rejected_property(name, value, outcome) {
                logger.warn(&warning);
            }
        }

        let actual_w = capture.get(CAP_PROP_FRAME_WIDTH).unwrap_or(0.0) as u32;
        let actual_h = capture.get(CAP_PROP_FRAME_HEIGHT).unwrap_or(0.0) as u32;

        if (actual_w, actual_h) != (width, height) {
            logger.warn(&format!(
                "Resolution mismatch (got: {}x{}, requested: {}x{})",
                actual_w, actual_h, width, height
            ));
        } else {
            logger.info(&format!("Capture resolution set to {}x{}", width, height));
        }
    }
}

/// Warning text when the backend did not accept a property, `None` if it did.
fn rejected_property(name: &str, value: u32, outcome: opencv::Result<bool>) -> Option<String> {
    match outcome {
        Ok(true) => None,
        Ok(false) => Some(format!("Camera ignored frame {} request of {}", name, value)),
        Err(e) => Some(format!("Failed to request frame {} {}: {}", name, value, e)),
    }
}

impl FrameSource for Camera {
    fn read_frame(&mut self) -> Result<VideoFrame> {
        if self.released {
            return Err(MediaError::Camera("Camera handle already released".to_string()));
        }

        let mut mat = Mat::default();
        let success = self
            .capture
            .read(&mut mat)
            .map_err(|e| MediaError::Camera(format!("Failed to read frame: {}", e)))?;

        if !success || mat.empty() {
            return Err(MediaError::Camera(format!(
                "Empty or invalid frame from camera {}",
                self.config.device_id
            )));
        }

        self.frame_count += 1;
        if self.frame_count.is_multiple_of(CAMERA_LOG_INTERVAL) {
            self.logger
                .debug(&format!("Frames captured: {}", self.frame_count));
        }

        Ok(VideoFrame::new(mat))
    }

    fn release(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        self.logger.info(&format!(
            "Releasing camera {}. Total frames captured: {}",
            self.config.device_id, self.frame_count
        ));
        self.capture
            .release()
            .map_err(|e| MediaError::Camera(format!("Error releasing camera: {}", e)))
    }

    fn is_released(&self) -> bool {
        self.released
    }

    fn device_id(&self) -> i32 {
        self.config.device_id
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            self.logger.error(&e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;
    use tempfile::tempdir;

    fn create_test_logger(dir: &tempfile::TempDir) -> Logger {
        Logger::new(&dir.path().join("test_camera.log"), LogLevel::Debug).unwrap()
    }

    #[test]
    fn test_invalid_index_opens_then_fails_on_read() {
        let dir = tempdir().unwrap();
        // Some OpenCV backends refuse to construct a capture for a bogus index.
        let Ok(mut camera) = Camera::open(CameraConfig::new(999), create_test_logger(&dir)) else {
            return;
        };

        assert!(camera.read_frame().is_err());
        assert_eq!(camera.frame_count, 0);
    }

    #[test]
    fn test_release_is_idempotent_and_blocks_reads() {
        let dir = tempdir().unwrap();
        let Ok(mut camera) = Camera::open(CameraConfig::new(999), create_test_logger(&dir)) else {
            return;
        };

        assert!(camera.release().is_ok());
        assert!(camera.is_released());
        assert!(camera.release().is_ok());

        match camera.read_frame() {
            Err(MediaError::Camera(msg)) => assert!(msg.contains("already released")),
            _ => panic!("Expected a camera error after release"),
        }
    }

    #[test]
    fn test_rejected_property_reports_refusals() {
        assert_eq!(rejected_property("width", 1280, Ok(true)), None);

        let ignored = rejected_property("width", 1280, Ok(false)).unwrap();
        assert_eq!(ignored, "Camera ignored frame width request of 1280");

        let failed = rejected_property(
            "height",
            720,
            Err(opencv::Error::new(opencv::core::StsError, "backend refused")),
        )
        .unwrap();
        assert!(failed.starts_with("Failed to request frame height 720"));
        assert!(failed.contains("backend refused"));
    }
}
