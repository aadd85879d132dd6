//! Capture and display seams
//!
//! The scan loop talks to the camera and the window system only through these
//! traits, so it can run against OpenCV in production and against scripted
//! doubles in tests.

use super::frame::VideoFrame;
use crate::error::Result;

/// A source of camera frames that owns a device handle.
pub trait FrameSource {
    /// Reads the next frame.
    ///
    /// # Returns
    /// * `Ok(VideoFrame)` - A non-empty frame
    /// * `Err` - If the device failed, the stream ended, or the handle was
    ///   already released
    fn read_frame(&mut self) -> Result<VideoFrame>;

    /// Releases the device. Later calls are no-ops and later reads fail.
    fn release(&mut self) -> Result<()>;

    /// Whether [`FrameSource::release`] has run.
    fn is_released(&self) -> bool;

    /// Device index the source was opened with.
    fn device_id(&self) -> i32;
}

/// A window surface with keyboard polling.
pub trait FrameSink {
    /// Shows `frame` in the window titled `title`, creating it if needed.
    fn show(&mut self, title: &str, frame: &VideoFrame) -> Result<()>;

    /// Waits up to `delay_ms` for a key press.
    ///
    /// Returns the raw key code, or `None` if no key was pressed.
    fn poll_key(&mut self, delay_ms: i32) -> Result<Option<i32>>;

    /// Closes every window this sink opened.
    fn close_all(&mut self) -> Result<()>;
}

impl<T: FrameSource + ?Sized> FrameSource for Box<T> {
    fn read_frame(&mut self) -> Result<VideoFrame> {
        (**self).read_frame()
    }

    fn release(&mut self) -> Result<()> {
        (**self).release()
    }

    fn is_released(&self) -> bool {
        (**self).is_released()
    }

    fn device_id(&self) -> i32 {
        (**self).device_id()
    }
}

impl<T: FrameSink + ?Sized> FrameSink for Box<T> {
    fn show(&mut self, title: &str, frame: &VideoFrame) -> Result<()> {
        (**self).show(title, frame)
    }

    fn poll_key(&mut self, delay_ms: i32) -> Result<Option<i32>> {
        (**self).poll_key(delay_ms)
    }

    fn close_all(&mut self) -> Result<()> {
        (**self).close_all()
    }
}
