//! Uniaxial load blocks and the stress quantities derived from them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A block of `cycles` constant-amplitude cycles between `sigma_min` and `sigma_max`.
///
/// Blocks arrive already counted; no cycle counting happens here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LoadBlock {
    /// Peak stress of the cycle, in MPa.
    pub sigma_max: f64,
    /// Valley stress of the cycle, in MPa.
    pub sigma_min: f64,
    /// Number of applied cycles. Fractional counts (half cycles) are allowed.
    pub cycles: f64,
}

impl LoadBlock {
    pub fn new(sigma_max: f64, sigma_min: f64, cycles: f64) -> Self {
        LoadBlock { sigma_max, sigma_min, cycles }
    }

    /// Validates the block at position `index` of its spectrum.
    ///
    /// Requires finite stresses, `sigma_max >= sigma_min` and `cycles > 0`.
    pub fn validate(&self, index: usize) -> Result<(), ConfigurationError> {
        if !self.sigma_max.is_finite() || !self.sigma_min.is_finite() {
            return Err(ConfigurationError::NonFiniteStress { index });
        }
        if self.sigma_max < self.sigma_min {
            return Err(ConfigurationError::InvertedBlock {
                index,
                sigma_max: self.sigma_max,
                sigma_min: self.sigma_min,
            });
        }
        if !(self.cycles.is_finite() && self.cycles > 0.0) {
            return Err(ConfigurationError::NonPositiveCycles { index, cycles: self.cycles });
        }
        Ok(())
    }

    pub fn alternating_stress(&self) -> f64 {
        alternating_stress(self.sigma_max, self.sigma_min)
    }

    pub fn mean_stress(&self) -> f64 {
        mean_stress(self.sigma_max, self.sigma_min)
    }
}

/// Validates every block of a spectrum, in order. An empty spectrum is valid.
pub fn validate_spectrum(blocks: &[LoadBlock]) -> Result<(), ConfigurationError> {
    blocks
        .iter()
        .enumerate()
        .try_for_each(|(index, block)| block.validate(index))
}

/// Stress amplitude `0.5 (σmax − σmin)`. Non-negative whenever `σmax >= σmin`.
pub fn alternating_stress(sigma_max: f64, sigma_min: f64) -> f64 {
    0.5 * (sigma_max - sigma_min)
}

/// Mean stress `0.5 (σmax + σmin)`.
pub fn mean_stress(sigma_max: f64, sigma_min: f64) -> f64 {
    0.5 * (sigma_max + sigma_min)
}
