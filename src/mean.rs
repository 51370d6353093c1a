//! Mean stress correction.

use crate::error::DomainError;

/// Goodman correction `σa / (1 − σm/σu)`.
///
/// Maps an asymmetric cycle to the fully-reversed amplitude with the same
/// damaging effect. Fails when `σm >= σu`: at equality the result is infinite,
/// above it the result would be negative.
pub fn goodman(sigma_a: f64, sigma_m: f64, sigma_u: f64) -> Result<f64, DomainError> {
    if sigma_m == sigma_u {
        return Err(DomainError::MeanStressAtUltimate { mean: sigma_m, ultimate: sigma_u });
    }
    if sigma_m > sigma_u {
        return Err(DomainError::MeanStressAboveUltimate { mean: sigma_m, ultimate: sigma_u });
    }
    Ok(sigma_a / (1.0 - sigma_m / sigma_u))
}
