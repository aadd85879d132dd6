use depth::{Colormap, DepthEstimator, EstimationMode, EstimatorConfig, depth_to_color};
use media::VideoFrame;
use opencv::core::{CV_32F, CV_8UC3, Mat, Scalar, Size};
use opencv::prelude::*;

/// Uses the row index as depth, whatever the frame shows.
struct RampEstimator {
    colormap: Colormap,
}

impl DepthEstimator for RampEstimator {
    fn colormap(&mut self, frame: &VideoFrame) -> depth::Result<VideoFrame> {
        let mut ramp = Mat::new_rows_cols_with_default(16, 16, CV_32F, Scalar::all(0.0))?;
        for r in 0..16 {
            for c in 0..16 {
                *ramp.at_2d_mut::<f32>(r, c)? = r as f32;
            }
        }
        let colored = depth_to_color(&ramp, Size::new(frame.width(), frame.height()), self.colormap)?;
        Ok(VideoFrame::new(colored))
    }

    fn live_render(&self) -> bool {
        false
    }

    fn device(&self) -> &str {
        "cpu"
    }
}

#[test]
fn test_boxed_estimator_keeps_frame_size() {
    let frame = VideoFrame::new(Mat::new_rows_cols_with_default(120, 200, CV_8UC3, Scalar::all(0.0)).unwrap());
    let mut estimator: Box<dyn DepthEstimator> = Box::new(RampEstimator {
        colormap: Colormap::Viridis,
    });

    let colored = estimator.colormap(&frame).unwrap();

    assert_eq!(colored.dimensions(), (120, 200, 3));
    assert_eq!(estimator.device(), "cpu");
    assert!(!estimator.live_render());
}

#[test]
fn test_every_colormap_renders() {
    let frame = VideoFrame::new(Mat::new_rows_cols_with_default(32, 32, CV_8UC3, Scalar::all(0.0)).unwrap());

    for colormap in Colormap::ALL {
        let mut estimator = RampEstimator { colormap };
        let colored = estimator.colormap(&frame).unwrap();
        assert_eq!(colored.channels(), 3, "{colormap} should give a BGR image");
    }
}

#[test]
fn test_each_mode_names_its_model() {
    let dir = std::path::Path::new("/opt/midas");
    let files: Vec<_> = EstimationMode::ALL
        .iter()
        .map(|&mode| {
            let config = EstimatorConfig {
                mode,
                model_dir: dir.to_path_buf(),
                ..EstimatorConfig::default()
            };
            config.model_path()
        })
        .collect();

    assert_eq!(files[0], dir.join("midas_v21_small_256.onnx"));
    assert_eq!(files[1], files[0]);
    assert_eq!(files[2], dir.join("dpt_hybrid_384.onnx"));
    assert_eq!(files[3], dir.join("dpt_large_384.onnx"));
}
