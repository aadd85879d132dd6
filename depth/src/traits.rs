//! The estimator seam consumed by the scanner.

use crate::error::Result;
use media::VideoFrame;

/// Maps camera frames to false-color depth visualizations.
pub trait DepthEstimator {
    /// Estimates depth for `frame` and returns a colorized image of the same
    /// width and height. `frame` is not modified.
    fn colormap(&mut self, frame: &VideoFrame) -> Result<VideoFrame>;

    /// Whether every frame should be rendered as depth.
    fn live_render(&self) -> bool;

    /// Identifier of the compute device, e.g. `"cpu"`.
    fn device(&self) -> &str;
}

impl<T: DepthEstimator + ?Sized> DepthEstimator for &mut T {
    fn colormap(&mut self, frame: &VideoFrame) -> Result<VideoFrame> {
        (**self).colormap(frame)
    }

    fn live_render(&self) -> bool {
        (**self).live_render()
    }

    fn device(&self) -> &str {
        (**self).device()
    }
}

impl<T: DepthEstimator + ?Sized> DepthEstimator for Box<T> {
    fn colormap(&mut self, frame: &VideoFrame) -> Result<VideoFrame> {
        (**self).colormap(frame)
    }

    fn live_render(&self) -> bool {
        (**self).live_render()
    }

    fn device(&self) -> &str {
        (**self).device()
    }
}
