//! The depth scan loop.
//!
//! [`DepthCamera`] owns a frame source, a window sink and a depth estimator.
//! [`DepthCamera::run`] blocks on the calling thread until a quit key or a
//! failure, then releases the camera and closes every window exactly once.

use crate::constants::keys::POLL_DELAY_MS;
use crate::constants::overlay::{FPS_ORIGIN, FPS_STYLE};
use crate::constants::timestamps::{DATE_FORMAT, TIME_FORMAT};
use crate::constants::{defaults, windows};
use crate::error::{Result, ScanError};
use crate::fps::FrameTimer;
use crate::keys::KeyAction;
use crate::scale::DisplayScale;
use chrono::Local;
use depth::{DepthEstimator, EstimatorConfig, MidasEstimator};
use logging::Logger;
use media::{Camera, CameraConfig, FrameSink, FrameSource, HighGui, VideoFrame, overlay_text, resize};
use std::fmt;

/// Scanner wired to a real camera, HighGUI windows and a MiDaS network.
pub type LiveScanner = DepthCamera<Camera, HighGui, MidasEstimator>;

/// Loop lifecycle, `Stopped` until [`DepthCamera::run`] starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    Running,
    #[default]
    Stopped,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The user pressed Esc or `q`
    Quit,
    /// A frame could not be read, estimated or shown
    Failed(String),
}

/// Result of [`DepthCamera::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Frames shown in the loop window
    pub frames: u64,
    /// One-shot captures taken
    pub captures: u64,
    pub outcome: ScanOutcome,
}

impl ScanSummary {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Failed(_))
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames, {} captures, ", self.frames, self.captures)?;
        match &self.outcome {
            ScanOutcome::Quit => write!(f, "stopped by user"),
            ScanOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Inputs for [`DepthCamera::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerOptions {
    pub camera: CameraConfig,
    pub estimator: EstimatorConfig,
    /// Initial display scale
    pub scale: f64,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            camera: CameraConfig::new(defaults::CAMERA),
            estimator: EstimatorConfig::default(),
            scale: defaults::SCALE,
        }
    }
}

impl ScannerOptions {
    /// Options from a camera index, mode label, display scale and colormap
    /// label, e.g. `(0, "live", 0.5, "jet")`.
    ///
    /// # Returns
    /// * `Err(ScanError::Depth)` - If the mode or colormap label is unknown
    /// * `Err(ScanError::InvalidScale)` - If `scale` is not positive and finite
    pub fn from_labels(camera: i32, mode: &str, scale: f64, color: &str) -> Result<Self> {
        DisplayScale::new(scale)?;
        Ok(Self {
            camera: CameraConfig::new(camera),
            estimator: EstimatorConfig::from_labels(mode, color)?,
            scale,
        })
    }
}

/// Window titles for one-shot captures, unique within a second.
#[derive(Debug, Default)]
struct CaptureTitles {
    last: Option<String>,
    repeat: u32,
}

impl CaptureTitles {
    /// `Depth Scan - HH:MM:SS`, then `Depth Scan - HH:MM:SS (2)` and so on for
    /// further captures in the same second.
    fn next(&mut self, time: &str) -> String {
        let base = format!("{} - {}", windows::CAPTURE_PREFIX, time);

        if self.last.as_deref() == Some(base.as_str()) {
            self.repeat += 1;
            format!("{} ({})", base, self.repeat)
        } else {
            self.repeat = 1;
            self.last = Some(base.clone());
            base
        }
    }
}

/// Real-time depth scanner.
///
/// Generic over its three collaborators so the loop can be driven by scripted
/// doubles; production code uses [`LiveScanner`].
pub struct DepthCamera<S: FrameSource, D: FrameSink, E: DepthEstimator> {
    camera: S,
    display: D,
    estimator: E,
    scale: DisplayScale,
    state: RunState,
    captures: CaptureTitles,
    torn_down: bool,
    logger: Logger,
}

impl DepthCamera<Camera, HighGui, MidasEstimator> {
    /// Opens the camera, loads the depth model and prepares the window sink.
    ///
    /// An unavailable camera is not an error here; it surfaces as a failed
    /// read once [`DepthCamera::run`] starts.
    ///
    /// # Returns
    /// * `Err(ScanError::InvalidScale)` - If `options.scale` is not positive
    /// * `Err(ScanError::Depth)` - If the model cannot be loaded
    pub fn new(options: ScannerOptions, logger: &Logger) -> Result<Self> {
        let scale = DisplayScale::new(options.scale)?;
        let mode = options.estimator.mode;
        let colormap = options.estimator.colormap;

        let camera = Camera::open(options.camera, logger.for_component("Camera"))?;
        let estimator = MidasEstimator::load(options.estimator, logger.for_component("Depth"))?;
        let display = HighGui::new(logger.for_component("Display"));

        let scanner = Self::from_parts(camera, display, estimator, scale, logger.for_component("Scanner"));
        scanner.logger.info(&format!(
            "Starting up depth scanner, running {} mode and using {} mapping.",
            mode, colormap
        ));
        Ok(scanner)
    }
}

impl<S: FrameSource, D: FrameSink, E: DepthEstimator> DepthCamera<S, D, E> {
    /// Assembles a scanner from ready-made parts.
    pub fn from_parts(camera: S, display: D, estimator: E, scale: DisplayScale, logger: Logger) -> Self {
        Self {
            camera,
            display,
            estimator,
            scale,
            state: RunState::Stopped,
            captures: CaptureTitles::default(),
            torn_down: false,
            logger,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn scale(&self) -> f64 {
        self.scale.get()
    }

    /// Sets the display scale. Takes effect from the next frame.
    ///
    /// # Returns
    /// * `Err(ScanError::InvalidScale)` - If `factor` is not positive and
    ///   finite; the previous scale is kept
    pub fn set_scale(&self, factor: f64) -> Result<()> {
        match self.scale.set(factor) {
            Ok(()) => {
                self.logger.debug(&format!("Display scale set to {}", factor));
                Ok(())
            }
            Err(e) => {
                self.logger.warn(&format!("Rejected display scale: {}", e));
                Err(e)
            }
        }
    }

    /// Handle that changes the scale of this scanner from elsewhere, including
    /// while [`DepthCamera::run`] is blocking.
    pub fn scale_handle(&self) -> DisplayScale {
        self.scale.clone()
    }

    /// Colorizes `frame` as depth and shows it in a new capture window.
    ///
    /// The capture window stays open until the scanner closes all windows.
    pub fn capture(&mut self, frame: &VideoFrame) -> Result<()> {
        let colored = self.estimator.colormap(frame)?;

        let now = Local::now();
        let time = now.format(TIME_FORMAT).to_string();
        self.logger.info(&format!(
            "[{} | {}] Frame captured!",
            now.format(DATE_FORMAT),
            time
        ));

        let title = self.captures.next(&time);
        self.display.show(&title, &colored)?;
        Ok(())
    }

    /// Runs the capture, display and key handling loop until Esc, `q` or an
    /// error.
    ///
    /// Errors do not escape: they are logged and reported in the summary.
    /// Either way the camera is released and all windows are closed before
    /// returning. A scanner whose camera was released by an earlier run fails
    /// immediately.
    pub fn run(&mut self) -> ScanSummary {
        let mut summary = ScanSummary {
            frames: 0,
            captures: 0,
            outcome: ScanOutcome::Quit,
        };

        if self.torn_down {
            let err = ScanError::Released;
            self.logger.error(&format!("Error during camera streaming: {}", err));
            summary.outcome = ScanOutcome::Failed(err.to_string());
            return summary;
        }

        self.state = RunState::Running;
        self.logger.info(&format!(
            "[{}] Running depth scan...",
            self.estimator.device().to_uppercase()
        ));

        while self.state == RunState::Running {
            if let Err(e) = self.step(&mut summary) {
                self.logger.error(&format!("Error during camera streaming: {}", e));
                summary.outcome = ScanOutcome::Failed(e.to_string());
                break;
            }
        }

        self.state = RunState::Stopped;
        self.teardown();
        self.logger.info("Scanner closed!");
        self.logger.debug(&format!("Scan finished: {}", summary));
        summary
    }

    /// One loop iteration: read, render, show, then react to a key.
    fn step(&mut self, summary: &mut ScanSummary) -> Result<()> {
        let timer = FrameTimer::start();
        let frame = self.camera.read_frame()?;

        let live = self.estimator.live_render();
        let mut shown = if live {
            self.estimator.colormap(&frame)?
        } else {
            // Overlay must not reach a later capture of the raw frame.
            frame.try_clone()?
        };

        match timer.fps() {
            Some(fps) => overlay_text(&mut shown, &format!("FPS: {}", fps), FPS_ORIGIN, &FPS_STYLE)?,
            None => self.logger.debug("Zero-length frame interval, FPS overlay skipped"),
        }

        let scaled = resize(&shown, self.scale.get())?;
        let title = if live { windows::DEPTH } else { windows::STANDARD };
        self.display.show(title, &scaled)?;
        summary.frames += 1;

        match KeyAction::from_code(self.display.poll_key(POLL_DELAY_MS)?) {
            KeyAction::Capture if !live => {
                self.capture(&frame)?;
                summary.captures += 1;
            }
            KeyAction::Quit => {
                self.logger.info("Closing scanner...");
                self.state = RunState::Stopped;
            }
            KeyAction::Capture | KeyAction::Ignore => {}
        }

        Ok(())
    }

    /// Releases the camera and closes all windows, once.
    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        if let Err(e) = self.camera.release() {
            self.logger.error(&format!("Failed to release camera: {}", e));
        }
        if let Err(e) = self.display.close_all() {
            self.logger.error(&format!("Failed to close windows: {}", e));
        }
    }
}

impl<S: FrameSource, D: FrameSink, E: DepthEstimator> Drop for DepthCamera<S, D, E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S: FrameSource, D: FrameSink, E: DepthEstimator> fmt::Display for DepthCamera<S, D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<DepthCamera | camera={}, device={}>",
            self.camera.device_id(),
            self.estimator.device().to_uppercase()
        )
    }
}
