//! Miner's linear damage accumulation over a load spectrum.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{DomainError, Result};
use crate::life::fatigue_cycles;
use crate::material::Material;
use crate::mean::goodman;
use crate::stress::{validate_spectrum, LoadBlock};

/// Lower bound applied to cumulative damage before it is used as a divisor.
///
/// Damage below this value is treated as equal to it, so lives derived from a
/// negligible spectrum pile up at `reference / DAMAGE_FLOOR`.
pub const DAMAGE_FLOOR: f64 = 1e-6;

/// Miner's failure threshold. Damage at or above it means failure is expected.
pub const FAILURE_THRESHOLD: f64 = 1.0;

/// Outcome of one load block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockResult {
    /// Goodman-corrected fully-reversed amplitude, in MPa.
    pub equivalent_stress: f64,
    /// Basquin cycles to failure at `equivalent_stress`.
    pub cycles_to_failure: f64,
    /// Fraction of life consumed by the block, `n / Nf`.
    pub partial_damage: f64,
}

impl BlockResult {
    fn evaluate(material: &Material, block: &LoadBlock) -> std::result::Result<Self, DomainError> {
        let equivalent_stress = goodman(
            block.alternating_stress(),
            block.mean_stress(),
            material.ultimate_strength,
        )?;
        let cycles_to_failure = fatigue_cycles(
            material.fatigue_strength_coefficient,
            material.basquin_exponent,
            equivalent_stress,
        )?;
        Ok(BlockResult {
            equivalent_stress,
            cycles_to_failure,
            partial_damage: block.cycles / cycles_to_failure,
        })
    }
}

/// Classification of a cumulative damage value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Safe,
    FailureExpected,
}

impl Status {
    pub fn classify(damage: f64) -> Self {
        if damage >= FAILURE_THRESHOLD {
            Status::FailureExpected
        } else {
            Status::Safe
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Safe => write!(f, "SAFE"),
            Status::FailureExpected => write!(f, "FAILURE EXPECTED"),
        }
    }
}

/// Cumulative damage of a spectrum together with the per-block results, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageReport {
    pub total: f64,
    pub blocks: Vec<BlockResult>,
}

impl DamageReport {
    pub fn status(&self) -> Status {
        Status::classify(self.total)
    }

    pub fn into_parts(self) -> (f64, Vec<BlockResult>) {
        (self.total, self.blocks)
    }
}

/// Damage with `floor` applied, for use as a divisor.
pub fn floored_damage(damage: f64, floor: f64) -> f64 {
    damage.max(floor)
}

/// Runs Miner's rule over `blocks` for `material`.
///
/// Each block is reduced to its alternating and mean stress, Goodman-corrected,
/// turned into cycles to failure with Basquin's law, and contributes `n / Nf`.
/// The computation is all-or-nothing: the first failing block aborts it and no
/// partial total is returned.
pub fn compute_damage(material: &Material, blocks: &[LoadBlock]) -> Result<DamageReport> {
    material.validate()?;
    validate_spectrum(blocks)?;

    let (total, results) = blocks.iter().enumerate().try_fold(
        (0.0_f64, Vec::with_capacity(blocks.len())),
        |(total, mut results), (index, block)| {
            let result = BlockResult::evaluate(material, block)?;
            debug!(
                block = index,
                equivalent_stress = result.equivalent_stress,
                cycles_to_failure = result.cycles_to_failure,
                partial_damage = result.partial_damage,
                "evaluated load block"
            );
            results.push(result);
            Ok::<_, DomainError>((total + result.partial_damage, results))
        },
    )?;

    Ok(DamageReport { total, blocks: results })
}
