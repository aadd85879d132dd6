//! Constants shared across media modules

/// Log progress every N captured frames.
pub const CAMERA_LOG_INTERVAL: u64 = 1000;

/// Capture resolution limits accepted by [`crate::CameraConfig`].
pub mod resolution {
    /// Smallest accepted dimension.
    pub const MIN_DIMENSION: u32 = 1;
    /// Largest accepted dimension (8K).
    pub const MAX_DIMENSION: u32 = 7680;
}
