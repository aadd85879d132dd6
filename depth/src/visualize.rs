//! Depth map to false-color image.

use crate::colormap::Colormap;
use crate::error::{DepthError, Result};
use opencv::core::{self, CV_8U, Mat, NORM_MINMAX, Size};
use opencv::imgproc::{self, INTER_CUBIC};
use opencv::prelude::*;

/// Colorizes a single-channel depth map at `size`.
///
/// The map is resized with bicubic interpolation, stretched to the full 8-bit
/// range, and passed through `colormap`. The result is a 3-channel BGR image.
pub fn depth_to_color(depth: &Mat, size: Size, colormap: Colormap) -> Result<Mat> {
    if depth.empty() || depth.channels() != 1 {
        return Err(DepthError::Inference(format!(
            "Expected a single-channel depth map, got {} channel(s)",
            depth.channels()
        )));
    }

    let mut resized = Mat::default();
    imgproc::resize(depth, &mut resized, size, 0.0, 0.0, INTER_CUBIC)?;

    let mut normalized = Mat::default();
    core::normalize(
        &resized,
        &mut normalized,
        0.0,
        255.0,
        NORM_MINMAX,
        CV_8U,
        &core::no_array(),
    )?;

    let mut colored = Mat::default();
    imgproc::apply_color_map(&normalized, &mut colored, colormap.code())?;
    Ok(colored)
}
