//! Estimation modes and the networks behind them.

use crate::error::DepthError;
use std::fmt;
use std::str::FromStr;

/// MiDaS network variants, each exported to ONNX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    /// MiDaS v2.1 small, 256x256 input
    MidasSmall,
    /// DPT hybrid, 384x384 input
    DptHybrid,
    /// DPT large, 384x384 input
    DptLarge,
}

impl ModelVariant {
    /// File name looked up inside the model directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ModelVariant::MidasSmall => "midas_v21_small_256.onnx",
            ModelVariant::DptHybrid => "dpt_hybrid_384.onnx",
            ModelVariant::DptLarge => "dpt_large_384.onnx",
        }
    }

    /// Square input side length in pixels.
    pub fn input_size(&self) -> i32 {
        match self {
            ModelVariant::MidasSmall => 256,
            ModelVariant::DptHybrid | ModelVariant::DptLarge => 384,
        }
    }

    /// Per-channel mean in RGB order, on the 0-255 scale.
    pub fn mean(&self) -> [f64; 3] {
        match self {
            ModelVariant::MidasSmall => [123.675, 116.28, 103.53],
            ModelVariant::DptHybrid | ModelVariant::DptLarge => [127.5, 127.5, 127.5],
        }
    }

    /// Multiplier applied after mean subtraction.
    pub fn scale_factor(&self) -> f64 {
        match self {
            // 1 / (255 * 0.226), the average ImageNet std
            ModelVariant::MidasSmall => 1.0 / 57.63,
            ModelVariant::DptHybrid | ModelVariant::DptLarge => 1.0 / 127.5,
        }
    }
}

/// How the scanner uses depth estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimationMode {
    /// Raw camera feed, depth on demand with the small network
    #[default]
    Standard,
    /// Every frame rendered as depth with the small network
    Live,
    /// Raw feed, depth on demand with DPT hybrid
    Hybrid,
    /// Raw feed, depth on demand with DPT large
    Large,
}

impl EstimationMode {
    pub const ALL: [EstimationMode; 4] = [
        EstimationMode::Standard,
        EstimationMode::Live,
        EstimationMode::Hybrid,
        EstimationMode::Large,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EstimationMode::Standard => "standard",
            EstimationMode::Live => "live",
            EstimationMode::Hybrid => "hybrid",
            EstimationMode::Large => "large",
        }
    }

    pub fn model(&self) -> ModelVariant {
        match self {
            EstimationMode::Standard | EstimationMode::Live => ModelVariant::MidasSmall,
            EstimationMode::Hybrid => ModelVariant::DptHybrid,
            EstimationMode::Large => ModelVariant::DptLarge,
        }
    }

    /// Whether every frame goes through the network.
    pub fn live_render(&self) -> bool {
        matches!(self, EstimationMode::Live)
    }
}

impl fmt::Display for EstimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EstimationMode {
    type Err = DepthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label() == wanted)
            .ok_or_else(|| DepthError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_live_renders_every_frame() {
        assert!(EstimationMode::Live.live_render());
        assert!(!EstimationMode::Standard.live_render());
        assert!(!EstimationMode::Hybrid.live_render());
        assert!(!EstimationMode::Large.live_render());
    }

    #[test]
    fn test_mode_models() {
        assert_eq!(EstimationMode::Standard.model(), ModelVariant::MidasSmall);
        assert_eq!(EstimationMode::Live.model(), ModelVariant::MidasSmall);
        assert_eq!(EstimationMode::Large.model().input_size(), 384);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("standard".parse::<EstimationMode>().unwrap(), EstimationMode::Standard);
        assert_eq!(" LIVE ".parse::<EstimationMode>().unwrap(), EstimationMode::Live);
        assert!(matches!(
            "fast".parse::<EstimationMode>(),
            Err(DepthError::UnknownMode(_))
        ));
    }
}
