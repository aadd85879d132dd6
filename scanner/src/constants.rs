//! Scanner constants

use media::TextStyle;
use opencv::imgproc::FONT_HERSHEY_SIMPLEX;

/// Keyboard handling
pub mod keys {
    /// Wait applied by each key poll, in milliseconds
    pub const POLL_DELAY_MS: i32 = 10;
    /// Low byte of the key code is the key itself
    pub const CODE_MASK: i32 = 0xFF;

    pub const SPACE: i32 = 32;
    pub const ESCAPE: i32 = 27;
    pub const QUIT: i32 = b'q' as i32;
}

/// Window titles
pub mod windows {
    /// Loop window while every frame is rendered as depth
    pub const DEPTH: &str = "Depth Capture";
    /// Loop window in passthrough mode
    pub const STANDARD: &str = "Standard Camera";
    /// Prefix of one-shot capture windows
    pub const CAPTURE_PREFIX: &str = "Depth Scan";
}

/// FPS overlay
pub mod overlay {
    use super::*;

    /// Bottom-left corner of the text
    pub const FPS_ORIGIN: (i32, i32) = (10, 30);

    pub const FPS_STYLE: TextStyle = TextStyle {
        font_face: FONT_HERSHEY_SIMPLEX,
        font_scale: 0.7,
        color: [10.0, 255.0, 100.0],
        thickness: 2,
    };
}

/// `chrono` formats used in capture notices
pub mod timestamps {
    pub const DATE_FORMAT: &str = "%d %B %Y";
    pub const TIME_FORMAT: &str = "%H:%M:%S";
}

/// Defaults when neither the config file nor the command line sets a value
pub mod defaults {
    pub const CAMERA: i32 = 0;
    pub const SCALE: f64 = 1.0;
    pub const CONFIG_FILE: &str = "depthscan.conf";
    pub const LOG_FILE: &str = "depthscan.log";
}
