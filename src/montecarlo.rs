//! Monte Carlo propagation of material strength scatter into fatigue life.
//!
//! Every trial draws one strength scale factor, derives a perturbed material,
//! reruns Miner's rule over the unchanged spectrum and converts the damage into
//! a life sample `eta / max(D, floor)`. Trials share nothing mutable: a master
//! generator hands each trial its own seed up front, trials then run on the
//! rayon pool and are collected back in trial order. The same seed therefore
//! gives the same samples whatever the thread count.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::damage::{compute_damage, floored_damage, DAMAGE_FLOOR};
use crate::error::{ConfigurationError, Result};
use crate::material::Material;
use crate::stress::{validate_spectrum, LoadBlock};
use crate::weibull::WeibullParameters;

pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
pub const DEFAULT_SCATTER_MEAN: f64 = 1.0;
pub const DEFAULT_SCATTER_STD: f64 = 0.05;

/// Settings of a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Number of independent trials.
    pub sample_count: usize,
    /// Mean of the normal strength scale factor.
    pub scatter_mean: f64,
    /// Standard deviation of the normal strength scale factor.
    pub scatter_std: f64,
    /// Lower bound applied to trial damage before dividing by it.
    pub damage_floor: f64,
    /// Seed of the master generator. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        MonteCarloConfig {
            sample_count: DEFAULT_SAMPLE_COUNT,
            scatter_mean: DEFAULT_SCATTER_MEAN,
            scatter_std: DEFAULT_SCATTER_STD,
            damage_floor: DAMAGE_FLOOR,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        if self.sample_count == 0 {
            return Err(ConfigurationError::ZeroSampleCount);
        }
        let mean_ok = self.scatter_mean.is_finite() && self.scatter_mean > 0.0;
        let std_ok = self.scatter_std.is_finite() && self.scatter_std >= 0.0;
        if !(mean_ok && std_ok) {
            return Err(ConfigurationError::InvalidScatter {
                mean: self.scatter_mean,
                std: self.scatter_std,
            });
        }
        if !(self.damage_floor.is_finite() && self.damage_floor > 0.0) {
            return Err(ConfigurationError::NonPositiveDamageFloor(self.damage_floor));
        }
        Ok(())
    }

    fn scatter(&self) -> std::result::Result<Normal<f64>, ConfigurationError> {
        Normal::new(self.scatter_mean, self.scatter_std).map_err(|_| ConfigurationError::InvalidScatter {
            mean: self.scatter_mean,
            std: self.scatter_std,
        })
    }
}

/// Runs Monte Carlo trials for one configuration.
#[derive(Debug, Clone, Default)]
pub struct MonteCarloSimulator {
    config: MonteCarloConfig,
}

struct Trial {
    life: f64,
    floored: bool,
}

impl MonteCarloSimulator {
    pub fn new(config: MonteCarloConfig) -> Self {
        MonteCarloSimulator { config }
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Produces `sample_count` life samples, in trial order.
    ///
    /// `weibull.eta` stays fixed across trials. Any trial failure aborts the
    /// run; no trial is ever skipped.
    pub fn run(
        &self,
        material: &Material,
        blocks: &[LoadBlock],
        weibull: &WeibullParameters,
    ) -> Result<Vec<f64>> {
        self.config.validate()?;
        material.validate()?;
        validate_spectrum(blocks)?;
        let scatter = self.config.scatter()?;

        let mut master = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let trial_seeds: Vec<u64> = (0..self.config.sample_count).map(|_| master.gen()).collect();

        debug!(
            sample_count = self.config.sample_count,
            scatter_mean = self.config.scatter_mean,
            scatter_std = self.config.scatter_std,
            seed = ?self.config.seed,
            "starting Monte Carlo run"
        );

        let trials = trial_seeds
            .par_iter()
            .map(|&seed| self.trial(seed, &scatter, material, blocks, weibull.eta))
            .collect::<Result<Vec<Trial>>>()?;

        let floored = trials.iter().filter(|t| t.floored).count();
        if floored > 0 {
            warn!(
                floored,
                damage_floor = self.config.damage_floor,
                "trial damage fell below the floor, those lives pile up at eta / damage_floor"
            );
        }
        info!(samples = trials.len(), "Monte Carlo run finished");

        Ok(trials.into_iter().map(|t| t.life).collect())
    }

    fn trial(
        &self,
        seed: u64,
        scatter: &Normal<f64>,
        material: &Material,
        blocks: &[LoadBlock],
        eta: f64,
    ) -> Result<Trial> {
        let mut rng = StdRng::seed_from_u64(seed);
        let scale = scatter.sample(&mut rng);
        let perturbed = material.scaled(scale)?;
        let damage = compute_damage(&perturbed, blocks)?.total;
        Ok(Trial {
            life: eta / floored_damage(damage, self.config.damage_floor),
            floored: damage < self.config.damage_floor,
        })
    }
}

/// Life samples for `sample_count` trials with the default strength scatter.
///
/// `beta` is validated with `eta` but does not enter the sampling itself.
pub fn simulate_reliability(
    material: &Material,
    blocks: &[LoadBlock],
    beta: f64,
    eta: f64,
    sample_count: usize,
) -> Result<Vec<f64>> {
    let weibull = WeibullParameters::new(beta, eta)?;
    let simulator = MonteCarloSimulator::new(MonteCarloConfig {
        sample_count,
        ..MonteCarloConfig::default()
    });
    simulator.run(material, blocks, &weibull)
}
