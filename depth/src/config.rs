//! Estimator configuration.

use crate::colormap::Colormap;
use crate::device::DevicePreference;
use crate::error::Result;
use crate::mode::EstimationMode;
use std::path::PathBuf;

/// Everything needed to build a [`crate::MidasEstimator`].
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    pub mode: EstimationMode,
    pub colormap: Colormap,
    pub device: DevicePreference,
    /// Directory holding the ONNX model files
    pub model_dir: PathBuf,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            mode: EstimationMode::Standard,
            colormap: Colormap::Hot,
            device: DevicePreference::Auto,
            model_dir: PathBuf::from("models"),
        }
    }
}

impl EstimatorConfig {
    /// Builds a configuration from mode and colormap labels.
    ///
    /// # Returns
    /// * `Err(DepthError::UnknownMode | DepthError::UnknownColormap)` - If a
    ///   label is not recognized
    pub fn from_labels(mode: &str, color: &str) -> Result<Self> {
        Ok(Self {
            mode: mode.parse()?,
            colormap: color.parse()?,
            ..Self::default()
        })
    }

    /// Path of the model file the configured mode needs.
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(self.mode.model().file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepthError;

    #[test]
    fn test_defaults_match_scanner_defaults() {
        let config = EstimatorConfig::default();
        assert_eq!(config.mode, EstimationMode::Standard);
        assert_eq!(config.colormap, Colormap::Hot);
        assert_eq!(config.device, DevicePreference::Auto);
    }

    #[test]
    fn test_from_labels() {
        let config = EstimatorConfig::from_labels("large", "viridis").unwrap();
        assert_eq!(config.mode, EstimationMode::Large);
        assert_eq!(config.colormap, Colormap::Viridis);
    }

    #[test]
    fn test_from_labels_rejects_unknown() {
        assert!(matches!(
            EstimatorConfig::from_labels("standard", "sepia"),
            Err(DepthError::UnknownColormap(_))
        ));
        assert!(matches!(
            EstimatorConfig::from_labels("slow", "hot"),
            Err(DepthError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_model_path_follows_mode() {
        let config = EstimatorConfig {
            model_dir: PathBuf::from("/opt/midas"),
            ..EstimatorConfig::from_labels("hybrid", "hot").unwrap()
        };
        assert_eq!(config.model_path(), PathBuf::from("/opt/midas/dpt_hybrid_384.onnx"));
    }
}
