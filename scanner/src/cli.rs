//! Command line interface.
//!
//! Every flag is optional and overrides the matching configuration file key.

use crate::config::AppConfig;
use clap::Parser;
use depth::{Colormap, DevicePreference, EstimationMode};
use logging::LogLevel;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "depth-camera", version, about = "Live monocular depth estimation on a webcam feed")]
#[command(after_help = "Keys: Space = capture depth (standard modes), Esc/q = quit")]
pub struct Cli {
    /// Camera device index
    #[arg(short, long)]
    pub camera: Option<i32>,

    /// Estimation mode: standard, live, hybrid or large
    #[arg(short, long)]
    pub mode: Option<EstimationMode>,

    /// Display scale factor applied to each shown frame
    #[arg(short, long)]
    pub scale: Option<f64>,

    /// Colormap for depth images, e.g. hot, jet, inferno
    #[arg(long)]
    pub color: Option<Colormap>,

    /// Compute device: auto, cpu, cuda or opencl
    #[arg(long)]
    pub device: Option<DevicePreference>,

    /// Directory containing the ONNX depth models
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Configuration file (default: search for depthscan.conf)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum log level: debug, info, warn or error
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not echo log lines to the terminal
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Overrides `config` with every flag that was given.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(camera) = self.camera {
            config.camera = camera;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(color) = self.color {
            config.colormap = color;
        }
        if let Some(device) = self.device {
            config.device = device;
        }
        if let Some(dir) = &self.model_dir {
            config.model_dir = dir.clone();
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(path) = &self.log_file {
            config.log_path = Some(path.clone());
        }
        if self.quiet {
            config.console_output = false;
        }
    }
}
