//! Camera and display primitives for the depth scanner.
//!
//! Wraps OpenCV capture, HighGUI windows and the image helpers the scan loop
//! needs, behind the [`FrameSource`] and [`FrameSink`] traits.

pub mod camera;
pub mod constants;
pub mod display;
pub mod error;
pub mod frame;
pub mod traits;
pub mod utils;

pub use camera::{Camera, CameraConfig};
pub use display::HighGui;
pub use error::{MediaError, Result};
pub use frame::VideoFrame;
pub use traits::{FrameSink, FrameSource};
pub use utils::{TextStyle, overlay_text, resize, scaled_dimensions};
