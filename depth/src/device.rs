//! Compute device selection for the depth network.

use crate::error::DepthError;
use opencv::dnn;
use std::fmt;
use std::str::FromStr;

/// Device requested by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevicePreference {
    /// CUDA when available, otherwise CPU
    #[default]
    Auto,
    Cpu,
    Cuda,
    OpenCl,
}

impl DevicePreference {
    /// Picks the device to run on given whether a CUDA device exists.
    ///
    /// An explicit CUDA request without a CUDA device falls back to CPU.
    pub fn resolve(self, cuda_available: bool) -> ComputeDevice {
        match self {
            DevicePreference::Auto | DevicePreference::Cuda if cuda_available => ComputeDevice::Cuda,
            DevicePreference::OpenCl => ComputeDevice::OpenCl,
            _ => ComputeDevice::Cpu,
        }
    }
}

impl FromStr for DevicePreference {
    type Err = DepthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DevicePreference::Auto),
            "cpu" => Ok(DevicePreference::Cpu),
            "cuda" | "gpu" => Ok(DevicePreference::Cuda),
            "opencl" => Ok(DevicePreference::OpenCl),
            _ => Err(DepthError::UnknownDevice(s.to_string())),
        }
    }
}

/// Device the network actually runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeDevice {
    Cpu,
    Cuda,
    OpenCl,
}

impl ComputeDevice {
    /// Lower-case identifier; callers upper-case it for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComputeDevice::Cpu => "cpu",
            ComputeDevice::Cuda => "cuda",
            ComputeDevice::OpenCl => "opencl",
        }
    }

    /// OpenCV DNN `(backend, target)` pair for this device.
    pub fn dnn_backend_target(&self) -> (i32, i32) {
        match self {
            ComputeDevice::Cpu => (dnn::DNN_BACKEND_OPENCV, dnn::DNN_TARGET_CPU),
            ComputeDevice::Cuda => (dnn::DNN_BACKEND_CUDA, dnn::DNN_TARGET_CUDA),
            ComputeDevice::OpenCl => (dnn::DNN_BACKEND_OPENCV, dnn::DNN_TARGET_OPENCL),
        }
    }
}

impl fmt::Display for ComputeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_prefers_cuda() {
        assert_eq!(DevicePreference::Auto.resolve(true), ComputeDevice::Cuda);
        assert_eq!(DevicePreference::Auto.resolve(false), ComputeDevice::Cpu);
    }

    #[test]
    fn test_cuda_falls_back_to_cpu() {
        assert_eq!(DevicePreference::Cuda.resolve(false), ComputeDevice::Cpu);
    }

    #[test]
    fn test_explicit_choices_ignore_cuda() {
        assert_eq!(DevicePreference::Cpu.resolve(true), ComputeDevice::Cpu);
        assert_eq!(DevicePreference::OpenCl.resolve(true), ComputeDevice::OpenCl);
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!("GPU".parse::<DevicePreference>().unwrap(), DevicePreference::Cuda);
        assert_eq!("opencl".parse::<DevicePreference>().unwrap(), DevicePreference::OpenCl);
        assert!("tpu".parse::<DevicePreference>().is_err());
    }

    #[test]
    fn test_cpu_backend() {
        assert_eq!(
            ComputeDevice::Cpu.dnn_backend_target(),
            (dnn::DNN_BACKEND_OPENCV, dnn::DNN_TARGET_CPU)
        );
        assert_eq!(ComputeDevice::Cuda.to_string(), "cuda");
    }
}
