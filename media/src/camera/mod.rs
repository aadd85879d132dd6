//! Camera capture
//!
//! Configuration and the OpenCV-backed capture handle.

pub mod config;
pub mod device;

pub use config::CameraConfig;
pub use device::Camera;
