// src/lib.rs
//! Fatigue life and reliability prediction for variable amplitude load spectra.
//!
//! Load blocks are Goodman-corrected, converted to cycles to failure with
//! Basquin's law and summed with Miner's rule. The cumulative damage feeds a
//! two-parameter Weibull model and a Monte Carlo simulation of material
//! strength scatter.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub mod app_logic;
pub mod config;
pub mod damage;
pub mod error;
pub mod life;
pub mod material;
pub mod mean;
pub mod montecarlo;
pub mod statistics;
pub mod stress;
pub mod weibull;

pub use damage::{compute_damage, BlockResult, DamageReport, Status};
pub use error::{ConfigurationError, DomainError, Error, Result};
pub use material::Material;
pub use montecarlo::{simulate_reliability, MonteCarloConfig, MonteCarloSimulator};
pub use stress::LoadBlock;
pub use weibull::{failure_probability, mtbf, WeibullParameters};

// When the "wasm" feature is enabled, expose the core to the JavaScript host.
// Load blocks travel as three parallel arrays; errors become JS strings.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn run_damage(
    ultimate_strength: f64,
    fatigue_strength_coefficient: f64,
    basquin_exponent: f64,
    sigma_max: &[f64],
    sigma_min: &[f64],
    cycles: &[f64],
) -> std::result::Result<Vec<f64>, JsValue> {
    if sigma_max.len() != sigma_min.len() || sigma_max.len() != cycles.len() {
        return Err(JsValue::from_str("sigma_max, sigma_min and cycles must have the same length"));
    }
    let material = Material::new("wasm", ultimate_strength, fatigue_strength_coefficient, basquin_exponent);
    let blocks: Vec<LoadBlock> = sigma_max
        .iter()
        .zip(sigma_min)
        .zip(cycles)
        .map(|((&max, &min), &n)| LoadBlock::new(max, min, n))
        .collect();
    let report = compute_damage(&material, &blocks).map_err(|e| JsValue::from_str(&e.to_string()))?;
    // total damage first, then the partial damage of every block
    Ok(std::iter::once(report.total)
        .chain(report.blocks.iter().map(|b| b.partial_damage))
        .collect())
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn run_failure_probability(times: &[f64], beta: f64, eta: f64) -> std::result::Result<Vec<f64>, JsValue> {
    failure_probability(times, beta, eta).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn run_mtbf(beta: f64, eta: f64) -> std::result::Result<f64, JsValue> {
    mtbf(beta, eta).map_err(|e| JsValue::from_str(&e.to_string()))
}
