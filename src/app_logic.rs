//! A module for the main application logic of the fatigue reliability tool.
use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::{load_config, Config, OutputFormat};
use crate::damage::{compute_damage, BlockResult, Status};
use crate::error;
use crate::montecarlo::MonteCarloSimulator;
use crate::statistics::LifeSummary;
use crate::weibull::WeibullParameters;

/// Command line overrides applied on top of the configuration file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub json: bool,
    pub samples: Option<usize>,
    pub seed: Option<u64>,
}

/// Everything one analysis produces, in a form the reporting layer can consume.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub material: String,
    pub blocks: Vec<BlockResult>,
    pub damage: f64,
    pub status: Status,
    pub weibull: WeibullParameters,
    pub mtbf: f64,
    /// `(cycles, failure probability)` pairs over `[0, 2 eta]`.
    pub failure_curve: Vec<(f64, f64)>,
    pub life: LifeSummary,
}

/// Runs damage accumulation, the Weibull model and the Monte Carlo simulation for `config`.
pub fn analyse(config: &Config) -> error::Result<AnalysisReport> {
    config.validate()?;

    let damage = compute_damage(&config.material, &config.load_blocks)?;
    info!(damage = damage.total, status = %damage.status(), "cumulative damage computed");

    let weibull = WeibullParameters::from_damage(
        config.reliability.beta,
        damage.total,
        config.reliability.reference_life,
        config.monte_carlo.damage_floor,
    )?;
    let mtbf = weibull.mtbf();
    info!(beta = weibull.beta, eta = weibull.eta, mtbf, "reliability model built");

    let failure_curve = weibull.failure_curve(config.reliability.curve_points)?;
    let lives = MonteCarloSimulator::new(config.monte_carlo.clone()).run(
        &config.material,
        &config.load_blocks,
        &weibull,
    )?;
    let life = LifeSummary::from_samples(&lives)?;

    let status = damage.status();
    let (total, blocks) = damage.into_parts();
    Ok(AnalysisReport {
        material: config.material.name.clone(),
        blocks,
        damage: total,
        status,
        weibull,
        mtbf,
        failure_curve,
        life,
    })
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== FATIGUE DAMAGE REPORT ({}) ===", self.material)?;
        for (i, block) in self.blocks.iter().enumerate() {
            writeln!(
                f,
                "Block {}: sigma_eq = {:.1} MPa | Nf = {:.0} | Damage = {:.4}",
                i + 1,
                block.equivalent_stress,
                block.cycles_to_failure,
                block.partial_damage
            )?;
        }
        writeln!(f, "\nTotal cumulative damage D = {:.6}", self.damage)?;
        writeln!(f, "Status: {}", self.status)?;

        writeln!(f, "\n=== RELIABILITY MODEL ===")?;
        writeln!(f, "Weibull beta = {}", self.weibull.beta)?;
        writeln!(f, "Weibull eta  = {:.0} cycles", self.weibull.eta)?;
        writeln!(f, "MTBF         = {:.0} cycles", self.mtbf)?;

        writeln!(f, "\n=== MONTE CARLO LIFE ({} samples) ===", self.life.count)?;
        writeln!(f, "Mean life = {:.0} cycles", self.life.mean)?;
        writeln!(f, "5% life   = {:.0} cycles", self.life.p5)?;
        writeln!(f, "50% life  = {:.0} cycles", self.life.p50)?;
        writeln!(f, "95% life  = {:.0} cycles", self.life.p95)
    }
}

/// Renders the report as plain text.
pub fn render_text(report: &AnalysisReport) -> String {
    report.to_string()
}

/// Loads `config_path`, applies `options` and returns the rendered report.
pub fn run(config_path: &str, options: &RunOptions) -> Result<String> {
    info!(config = config_path, "running analysis");
    let mut conf = load_config(config_path)?;
    if let Some(samples) = options.samples {
        conf.monte_carlo.sample_count = samples;
    }
    if options.seed.is_some() {
        conf.monte_carlo.seed = options.seed;
    }

    let report = analyse(&conf).with_context(|| format!("analysis of {} failed", config_path))?;

    let format = if options.json { OutputFormat::Json } else { conf.output_format()? };
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => Ok(render_text(&report)),
    }
}
