//! Non-blocking component logger for the depth scanner.
//!
//! Records are handed to a dedicated writer thread over a channel and can be
//! mirrored to the console, which is where the scanner's user-facing notices
//! end up.

pub mod error;
mod log_level;
mod log_record;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
