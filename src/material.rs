//! A module for the material constants used by the stress-life model.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Material constants shared by every fatigue computation.
///
/// Values are immutable once built. A Monte Carlo trial derives a new
/// `Material` through [`Material::scaled`] instead of touching the original.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Material {
    /// Name of the material, used only for reporting.
    pub name: String,
    /// Ultimate tensile strength σu, in MPa.
    pub ultimate_strength: f64,
    /// Fatigue strength coefficient σf of the Basquin relation, in MPa.
    pub fatigue_strength_coefficient: f64,
    /// Basquin exponent b, conventionally negative.
    pub basquin_exponent: f64,
}

impl Material {
    pub fn new(
        name: impl Into<String>,
        ultimate_strength: f64,
        fatigue_strength_coefficient: f64,
        basquin_exponent: f64,
    ) -> Self {
        Material {
            name: name.into(),
            ultimate_strength,
            fatigue_strength_coefficient,
            basquin_exponent,
        }
    }

    /// Validates the material constants.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if `σu > 0`, `σf > 0` and `b` is finite and non-zero.
    /// Otherwise, returns a `DomainError` naming the offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.ultimate_strength.is_finite() && self.ultimate_strength > 0.0) {
            return Err(DomainError::InvalidMaterial {
                field: "ultimate_strength",
                value: self.ultimate_strength,
            });
        }
        if !(self.fatigue_strength_coefficient.is_finite() && self.fatigue_strength_coefficient > 0.0) {
            return Err(DomainError::InvalidMaterial {
                field: "fatigue_strength_coefficient",
                value: self.fatigue_strength_coefficient,
            });
        }
        if !self.basquin_exponent.is_finite() || self.basquin_exponent == 0.0 {
            return Err(DomainError::InvalidMaterial {
                field: "basquin_exponent",
                value: self.basquin_exponent,
            });
        }
        Ok(())
    }

    /// Derives a new material with both strengths multiplied by the same `scale`.
    ///
    /// σu and σf share one factor so that the correlation between ultimate and
    /// fatigue strength survives the perturbation. The exponent is unchanged.
    pub fn scaled(&self, scale: f64) -> Result<Material, DomainError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(DomainError::InvalidStrengthScale(scale));
        }
        Ok(Material {
            name: self.name.clone(),
            ultimate_strength: self.ultimate_strength * scale,
            fatigue_strength_coefficient: self.fatigue_strength_coefficient * scale,
            basquin_exponent: self.basquin_exponent,
        })
    }
}
