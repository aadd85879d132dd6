//! Real-time depth scanner.
//!
//! [`DepthCamera`] reads camera frames, optionally runs them through a depth
//! estimator, and shows them in a window with keyboard controls:
//!
//! | Key | Effect |
//! |---|---|
//! | Space | one-shot depth capture in its own window (standard modes only) |
//! | Esc, `q` | stop scanning |

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fps;
pub mod keys;
pub mod scale;
pub mod scanner;

pub use error::{Result, ScanError};
pub use scale::DisplayScale;
pub use scanner::{DepthCamera, LiveScanner, RunState, ScanOutcome, ScanSummary, ScannerOptions};
