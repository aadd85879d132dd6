//! Application Configuration
//!
//! Scanner settings read from a `key=value` file, with defaults for every key.

use crate::constants::defaults;
use crate::error::Result as ScanResult;
use crate::scanner::ScannerOptions;
use config_loader::{ConfigError, Entry, Result, find_config_file, load_config_file, parse_key_values};
use depth::{Colormap, DevicePreference, EstimationMode, EstimatorConfig};
use logging::LogLevel;
use media::CameraConfig;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Camera device index
    pub camera: i32,
    pub mode: EstimationMode,
    /// Initial display scale
    pub scale: f64,
    pub colormap: Colormap,
    pub device: DevicePreference,
    /// Directory containing the ONNX models
    pub model_dir: PathBuf,
    /// Requested capture width, used only together with `height`
    pub width: Option<u32>,
    /// Requested capture height, used only together with `width`
    pub height: Option<u32>,
    /// Log file, `None` for console only
    pub log_path: Option<PathBuf>,
    pub log_level: LogLevel,
    /// Echo log lines to the terminal
    pub console_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let estimator = EstimatorConfig::default();
        Self {
            camera: defaults::CAMERA,
            mode: estimator.mode,
            scale: defaults::SCALE,
            colormap: estimator.colormap,
            device: estimator.device,
            model_dir: estimator.model_dir,
            width: None,
            height: None,
            log_path: Some(PathBuf::from(defaults::LOG_FILE)),
            log_level: LogLevel::Info,
            console_output: true,
        }
    }
}

/// A configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// File the values were read from, `None` when running on defaults
    pub source: Option<PathBuf>,
    /// Ignored settings, for logging once a logger exists
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Parses configuration text.
    ///
    /// Format:
    /// ```text
    /// camera=0
    /// mode=standard
    /// scale=1.0
    /// color=hot
    /// device=auto
    /// model_dir=models
    /// log_path=depthscan.log
    /// log_level=info
    /// ```
    ///
    /// Unknown keys are skipped and reported in the returned warnings.
    ///
    /// # Returns
    /// * `Err(ConfigError::Parse)` - If a line is not `key=value`
    /// * `Err(ConfigError::InvalidValue)` - If a known key has an unusable value
    pub fn parse(content: &str) -> Result<(Self, Vec<String>)> {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        for entry in parse_key_values(content)? {
            match entry.key.as_str() {
                "camera" => config.camera = parse_value(&entry)?,
                "mode" => config.mode = parse_value(&entry)?,
                "scale" => {
                    let scale: f64 = parse_value(&entry)?;
                    if !scale.is_finite() || scale <= 0.0 {
                        return Err(invalid(&entry));
                    }
                    config.scale = scale;
                }
                "color" | "colormap" => config.colormap = parse_value(&entry)?,
                "device" => config.device = parse_value(&entry)?,
                "model_dir" => config.model_dir = PathBuf::from(&entry.value),
                "width" => config.width = Some(parse_value(&entry)?),
                "height" => config.height = Some(parse_value(&entry)?),
                "log_path" => {
                    config.log_path = match entry.value.as_str() {
                        "" | "none" => None,
                        path => Some(PathBuf::from(path)),
                    }
                }
                "log_level" => config.log_level = parse_value(&entry)?,
                "console_output" => config.console_output = parse_bool(&entry)?,
                other => warnings.push(format!(
                    "Unknown configuration key '{}' on line {} ignored",
                    other, entry.line
                )),
            }
        }

        match (config.width, config.height) {
            (Some(_), None) | (None, Some(_)) => warnings.push(
                "Capture resolution needs both 'width' and 'height'; using the camera default".to_string(),
            ),
            _ => {}
        }

        Ok((config, warnings))
    }

    /// Loads configuration from the file at `path`.
    ///
    /// # Returns
    /// * `Err(ScanError::Config)` - If the file is missing, unreadable or
    ///   invalid
    pub fn load_from_file(path: &Path) -> ScanResult<LoadedConfig> {
        let content = load_config_file(path)?;
        let (config, warnings) = Self::parse(&content)?;
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Loads configuration from `explicit` if given, otherwise from the first
    /// `depthscan.conf` in the standard search locations.
    ///
    /// Falls back to defaults when no file is found by searching. A missing
    /// `explicit` file is an error.
    pub fn load(explicit: Option<&Path>) -> ScanResult<LoadedConfig> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match find_config_file(defaults::CONFIG_FILE) {
            Ok(path) => Self::load_from_file(&path),
            Err(ConfigError::FileNotFound(_)) => Ok(LoadedConfig {
                config: Self::default(),
                source: None,
                warnings: Vec::new(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Scanner construction inputs for this configuration.
    ///
    /// # Returns
    /// * `Err(ScanError::Media)` - If the requested resolution is out of range
    pub fn scanner_options(&self) -> ScanResult<ScannerOptions> {
        let mut camera = CameraConfig::new(self.camera);
        if let (Some(width), Some(height)) = (self.width, self.height) {
            camera = camera.with_resolution(width, height)?;
        }

        Ok(ScannerOptions {
            camera,
            estimator: EstimatorConfig {
                mode: self.mode,
                colormap: self.colormap,
                device: self.device,
                model_dir: self.model_dir.clone(),
            },
            scale: self.scale,
        })
    }
}

fn invalid(entry: &Entry) -> ConfigError {
    ConfigError::InvalidValue {
        key: entry.key.clone(),
        value: entry.value.clone(),
    }
}

fn parse_value<T: FromStr>(entry: &Entry) -> Result<T> {
    entry.value.parse().map_err(|_| invalid(entry))
}

fn parse_bool(entry: &Entry) -> Result<bool> {
    match entry.value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(entry)),
    }
}
