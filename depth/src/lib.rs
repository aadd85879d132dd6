//! Monocular depth estimation for camera frames.
//!
//! Turns a BGR frame into a false-color depth visualization. The scanner only
//! sees the [`DepthEstimator`] trait; [`MidasEstimator`] implements it with a
//! MiDaS ONNX export run through OpenCV DNN.

pub mod colormap;
pub mod config;
pub mod device;
pub mod error;
pub mod midas;
pub mod mode;
pub mod traits;
pub mod visualize;

pub use colormap::Colormap;
pub use config::EstimatorConfig;
pub use device::{ComputeDevice, DevicePreference};
pub use error::{DepthError, Result};
pub use midas::MidasEstimator;
pub use mode::{EstimationMode, ModelVariant};
pub use traits::DepthEstimator;
pub use visualize::depth_to_color;
