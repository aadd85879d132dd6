//! Display scale shared between the scan loop and its controllers.

use crate::error::{Result, ScanError};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Uniform factor applied to frame width and height before display.
///
/// Clones share one value, so a handle taken before [`crate::DepthCamera::run`]
/// can adjust the scale of a running loop from any thread. The loop reads it
/// once per frame.
#[derive(Debug, Clone)]
pub struct DisplayScale {
    bits: Arc<AtomicU64>,
}

impl DisplayScale {
    /// # Returns
    /// * `Err(ScanError::InvalidScale)` - If `factor` is not positive and finite
    pub fn new(factor: f64) -> Result<Self> {
        let factor = validate(factor)?;
        Ok(Self {
            bits: Arc::new(AtomicU64::new(factor.to_bits())),
        })
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Replaces the factor. A rejected value leaves the current one in place.
    pub fn set(&self, factor: f64) -> Result<()> {
        let factor = validate(factor)?;
        self.bits.store(factor.to_bits(), Ordering::Relaxed);
        Ok(())
    }
}

fn validate(factor: f64) -> Result<f64> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(ScanError::InvalidScale(factor))
    }
}
