//! Frame helpers
//!
//! Resizing and text overlay used when preparing frames for display.

use crate::error::{MediaError, Result};
use crate::frame::VideoFrame;
use opencv::core::{Mat, Point, Scalar, Size};
use opencv::imgproc::{self, FONT_HERSHEY_SIMPLEX, INTER_AREA, LINE_8};

/// Font settings for [`overlay_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// OpenCV Hershey font face
    pub font_face: i32,
    pub font_scale: f64,
    /// BGR color
    pub color: [f64; 3],
    /// Stroke width in pixels
    pub thickness: i32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_face: FONT_HERSHEY_SIMPLEX,
            font_scale: 1.0,
            color: [255.0, 255.0, 255.0],
            thickness: 1,
        }
    }
}

/// Target `(width, height)` for scaling a `width x height` image by `factor`.
///
/// Each dimension is rounded to the nearest integer, ties to even.
///
/// # Returns
/// * `Err(MediaError::Processing)` - If `factor` is not a positive finite
///   number, or the result would have a zero or oversized dimension
pub fn scaled_dimensions(width: i32, height: i32, factor: f64) -> Result<(i32, i32)> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(MediaError::Processing(format!(
            "Scale factor must be positive, got {}",
            factor
        )));
    }

    let scale = |dim: i32| (f64::from(dim) * factor).round_ties_even();
    let (new_w, new_h) = (scale(width), scale(height));

    if new_w < 1.0 || new_h < 1.0 || new_w > f64::from(i32::MAX) || new_h > f64::from(i32::MAX) {
        return Err(MediaError::Processing(format!(
            "Scaling {}x{} by {} gives an unusable size {}x{}",
            width, height, factor, new_w, new_h
        )));
    }

    Ok((new_w as i32, new_h as i32))
}

/// Returns a copy of `frame` scaled uniformly by `factor`.
///
/// Uses area resampling. `frame` is left untouched.
pub fn resize(frame: &VideoFrame, factor: f64) -> Result<VideoFrame> {
    if frame.is_empty() {
        return Err(MediaError::Processing("Cannot resize an empty frame".to_string()));
    }

    let (width, height) = scaled_dimensions(frame.width(), frame.height(), factor)?;

    let mut resized = Mat::default();
    imgproc::resize(
        frame.data(),
        &mut resized,
        Size::new(width, height),
        0.0,
        0.0,
        INTER_AREA,
    )?;

    Ok(VideoFrame::new(resized))
}

/// Draws `text` onto `frame` in place with its baseline starting at `origin`.
pub fn overlay_text(
    frame: &mut VideoFrame,
    text: &str,
    origin: (i32, i32),
    style: &TextStyle,
) -> Result<()> {
    let [b, g, r] = style.color;
    imgproc::put_text(
        frame.data_mut(),
        text,
        Point::new(origin.0, origin.1),
        style.font_face,
        style.font_scale,
        Scalar::new(b, g, r, 0.0),
        style.thickness,
        LINE_8,
        false,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{self, CV_8UC3};
    use opencv::prelude::*;

    fn solid_frame(rows: i32, cols: i32) -> VideoFrame {
        let mat = Mat::new_rows_cols_with_default(rows, cols, CV_8UC3, Scalar::all(40.0)).unwrap();
        VideoFrame::new(mat)
    }

    #[test]
    fn test_scaled_dimensions_identity() {
        assert_eq!(scaled_dimensions(640, 480, 1.0).unwrap(), (640, 480));
    }

    #[test]
    fn test_scaled_dimensions_rounds_ties_to_even() {
        // 5 * 0.5 = 2.5 -> 2, 7 * 0.5 = 3.5 -> 4
        assert_eq!(scaled_dimensions(5, 7, 0.5).unwrap(), (2, 4));
        assert_eq!(scaled_dimensions(640, 480, 1.5).unwrap(), (960, 720));
    }

    #[test]
    fn test_scaled_dimensions_rejects_bad_factors() {
        assert!(scaled_dimensions(640, 480, 0.0).is_err());
        assert!(scaled_dimensions(640, 480, -1.0).is_err());
        assert!(scaled_dimensions(640, 480, f64::NAN).is_err());
        assert!(scaled_dimensions(640, 480, f64::INFINITY).is_err());
    }

    #[test]
    fn test_scaled_dimensions_rejects_collapse_to_zero() {
        assert!(scaled_dimensions(640, 480, 0.0001).is_err());
    }

    #[test]
    fn test_resize_downscale_and_upscale() {
        let frame = solid_frame(480, 640);

        let half = resize(&frame, 0.5).unwrap();
        assert_eq!(half.dimensions(), (240, 320, 3));

        let double = resize(&frame, 2.0).unwrap();
        assert_eq!(double.dimensions(), (960, 1280, 3));
    }

    #[test]
    fn test_resize_leaves_input_untouched() {
        let frame = solid_frame(480, 640);
        let _ = resize(&frame, 0.25).unwrap();

        assert_eq!(frame.dimensions(), (480, 640, 3));
    }

    #[test]
    fn test_resize_empty_frame_fails() {
        let frame = VideoFrame::new(Mat::default());
        assert!(matches!(resize(&frame, 1.0), Err(MediaError::Processing(_))));
    }

    #[test]
    fn test_overlay_text_draws_in_place() {
        let mut frame = solid_frame(60, 200);
        let before = core::sum_elems(frame.data()).unwrap();

        let style = TextStyle {
            color: [10.0, 255.0, 100.0],
            thickness: 2,
            font_scale: 0.7,
            ..TextStyle::default()
        };
        overlay_text(&mut frame, "FPS: 30", (10, 30), &style).unwrap();

        let after = core::sum_elems(frame.data()).unwrap();
        assert_ne!(before[1], after[1]);
        assert_eq!(frame.dimensions(), (60, 200, 3));
    }
}
