//! HighGUI window surface.

use crate::error::{MediaError, Result};
use crate::frame::VideoFrame;
use crate::traits::FrameSink;
use logging::Logger;
use opencv::highgui;
use std::collections::BTreeSet;

/// OpenCV HighGUI windows plus keyboard polling.
pub struct HighGui {
    logger: Logger,
    windows: BTreeSet<String>,
}

impl HighGui {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            windows: BTreeSet::new(),
        }
    }
}

impl FrameSink for HighGui {
    fn show(&mut self, title: &str, frame: &VideoFrame) -> Result<()> {
        highgui::imshow(title, frame.data())
            .map_err(|e| MediaError::Display(format!("Cannot show '{}': {}", title, e)))?;

        if !self.windows.contains(title) {
            self.logger.debug(&format!("Opened window '{}'", title));
            self.windows.insert(title.to_string());
        }
        Ok(())
    }

    fn poll_key(&mut self, delay_ms: i32) -> Result<Option<i32>> {
        let code = highgui::wait_key(delay_ms)?;
        Ok((code >= 0).then_some(code))
    }

    fn close_all(&mut self) -> Result<()> {
        self.logger
            .debug(&format!("Closing {} window(s)", self.windows.len()));
        self.windows.clear();
        highgui::destroy_all_windows()
            .map_err(|e| MediaError::Display(format!("Cannot close windows: {}", e)))
    }
}
