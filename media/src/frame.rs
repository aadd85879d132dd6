//! Video frame representation.
//!
//! A `VideoFrame` is one raster image moving through the scan loop, from the
//! camera read to the window.

use crate::error::Result;
use opencv::core::Mat;
use opencv::prelude::*;

/// Raw video frame
///
/// Wraps an OpenCV Mat, BGR for camera frames.
pub struct VideoFrame {
    data: Mat,
}

impl VideoFrame {
    pub fn new(mat: Mat) -> Self {
        VideoFrame { data: mat }
    }

    /// Frame width in pixels
    pub fn width(&self) -> i32 {
        self.data.cols()
    }

    /// Frame height in pixels
    pub fn height(&self) -> i32 {
        self.data.rows()
    }

    /// Number of interleaved channels (3 for BGR camera frames)
    pub fn channels(&self) -> i32 {
        self.data.channels()
    }

    /// `(height, width, channels)`
    pub fn dimensions(&self) -> (i32, i32, i32) {
        (self.height(), self.width(), self.channels())
    }

    /// True when the frame holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.empty()
    }

    pub fn data(&self) -> &Mat {
        &self.data
    }

    /// Mutable access for in-place drawing.
    pub fn data_mut(&mut self) -> &mut Mat {
        &mut self.data
    }

    /// Deep copy of the pixels.
    pub fn try_clone(&self) -> Result<VideoFrame> {
        Ok(VideoFrame {
            data: self.data.try_clone()?,
        })
    }
}
