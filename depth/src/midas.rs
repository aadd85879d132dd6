//! MiDaS depth estimator on OpenCV DNN.
//!
//! Loads a MiDaS/DPT ONNX export, runs it on the configured compute device and
//! colorizes the relative inverse depth it predicts.

use crate::config::EstimatorConfig;
use crate::device::{ComputeDevice, DevicePreference};
use crate::error::{DepthError, Result};
use crate::traits::DepthEstimator;
use crate::visualize::depth_to_color;
use logging::Logger;
use media::VideoFrame;
use opencv::core::{self, CV_32F, Mat, Scalar, Size};
use opencv::dnn::{self, Net};
use opencv::prelude::*;

/// Depth estimator backed by a MiDaS network.
pub struct MidasEstimator {
    net: Net,
    config: EstimatorConfig,
    device: ComputeDevice,
    logger: Logger,
    inferences: u64,
}

impl MidasEstimator {
    /// Loads the network for `config.mode` from `config.model_dir`.
    ///
    /// # Returns
    /// * `Err(DepthError::Model)` - If the model file is missing or OpenCV
    ///   cannot parse it
    pub fn load(config: EstimatorConfig, logger: Logger) -> Result<Self> {
        let path = config.model_path();
        let variant = config.mode.model();

        if !path.is_file() {
            return Err(DepthError::Model(format!(
                "{} not found; place the {:?} ONNX export there or set model_dir",
                path.display(),
                variant
            )));
        }
        let path_str = path
            .to_str()
            .ok_or_else(|| DepthError::Model(format!("Non UTF-8 model path: {}", path.display())))?;

        logger.info(&format!("Loading depth model {}", path.display()));
        let mut net = dnn::read_net_from_onnx(path_str)
            .map_err(|e| DepthError::Model(format!("Cannot load {}: {}", path.display(), e)))?;

        let device = Self::select_device(config.device, &logger);
        let (backend, target) = device.dnn_backend_target();
        net.set_preferable_backend(backend)?;
        net.set_preferable_target(target)?;

        logger.info(&format!(
            "Depth model ready: {:?} ({}x{} input) on {}",
            variant,
            variant.input_size(),
            variant.input_size(),
            device.as_str().to_uppercase()
        ));

        Ok(Self {
            net,
            config,
            device,
            logger,
            inferences: 0,
        })
    }

    fn select_device(preference: DevicePreference, logger: &Logger) -> ComputeDevice {
        let cuda_available = core::get_cuda_enabled_device_count()
            .map(|count| count > 0)
            .unwrap_or(false);
        let device = preference.resolve(cuda_available);

        if preference == DevicePreference::Cuda && device != ComputeDevice::Cuda {
            logger.warn("CUDA requested but no CUDA device is available; using CPU");
        }
        device
    }

    /// Runs the network and returns its raw `side x side` float depth map.
    fn infer(&mut self, frame: &VideoFrame) -> Result<Mat> {
        let variant = self.config.mode.model();
        let side = variant.input_size();
        let [r, g, b] = variant.mean();

        let blob = dnn::blob_from_image(
            frame.data(),
            variant.scale_factor(),
            Size::new(side, side),
            Scalar::new(r, g, b, 0.0),
            true,
            false,
            CV_32F,
        )?;

        self.net.set_input(&blob, "", 1.0, Scalar::default())?;
        let output = self.net.forward_single("")?;

        let expected = (side * side) as usize;
        if output.total() != expected {
            return Err(DepthError::Inference(format!(
                "Network produced {} values, expected {}",
                output.total(),
                expected
            )));
        }

        // 1 x side x side -> side x side
        let depth = output.reshape(1, side)?;
        Ok(depth.try_clone()?)
    }
}

impl DepthEstimator for MidasEstimator {
    fn colormap(&mut self, frame: &VideoFrame) -> Result<VideoFrame> {
        if frame.is_empty() {
            return Err(DepthError::Inference("Cannot estimate depth of an empty frame".to_string()));
        }

        let depth = self.infer(frame)?;
        let colored = depth_to_color(
            &depth,
            Size::new(frame.width(), frame.height()),
            self.config.colormap,
        )?;

        self.inferences += 1;
        if self.inferences.is_multiple_of(500) {
            self.logger
                .debug(&format!("Depth inferences run: {}", self.inferences));
        }

        Ok(VideoFrame::new(colored))
    }

    fn live_render(&self) -> bool {
        self.config.mode.live_render()
    }

    fn device(&self) -> &str {
        self.device.as_str()
    }
}
