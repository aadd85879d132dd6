use media::{Camera, CameraConfig, FrameSource, TextStyle, VideoFrame, overlay_text, resize};
use logging::{LogLevel, Logger};
use opencv::core::{CV_8UC3, Mat, Scalar};
use opencv::prelude::*;

fn gray_frame(width: i32, height: i32) -> VideoFrame {
    let mat = Mat::new_rows_cols_with_default(height, width, CV_8UC3, Scalar::all(64.0)).unwrap();
    VideoFrame::new(mat)
}

/// Overlay then downscale, the way frames are prepared for display
#[test]
fn test_overlay_then_resize() {
    let mut frame = gray_frame(640, 480);
    let style = TextStyle {
        font_scale: 0.7,
        color: [10.0, 255.0, 100.0],
        thickness: 2,
        ..TextStyle::default()
    };

    overlay_text(&mut frame, "FPS: 30", (10, 30), &style).unwrap();
    let small = resize(&frame, 0.25).unwrap();

    assert_eq!(small.dimensions(), (120, 160, 3));
    assert_eq!(frame.dimensions(), (480, 640, 3));
}

#[test]
fn test_odd_sizes_round_to_even() {
    // 5 * 0.5 = 2.5 -> 2, 3 * 0.5 = 1.5 -> 2
    let small = resize(&gray_frame(5, 3), 0.5).unwrap();
    assert_eq!((small.width(), small.height()), (2, 2));
}

/// Needs no camera: an absent device must fail reads, not construction.
#[test]
fn test_absent_camera_behind_trait_object() {
    let logger = Logger::with_sinks(None, LogLevel::Debug, false).unwrap();
    let Ok(camera) = Camera::open(CameraConfig::new(97), logger) else {
        eprintln!("Capture backend unavailable - skipping test");
        return;
    };

    let mut source: Box<dyn FrameSource> = Box::new(camera);
    assert_eq!(source.device_id(), 97);
    assert!(source.read_frame().is_err());

    source.release().unwrap();
    source.release().unwrap();
    assert!(source.is_released());
}
