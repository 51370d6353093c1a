//! A module for loading and validating the configuration of a fatigue reliability analysis.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{self, ConfigurationError, DomainError};
use crate::material::Material;
use crate::montecarlo::MonteCarloConfig;
use crate::stress::{validate_spectrum, LoadBlock};

/// Reference life, in cycles, that one unit of inverse damage is worth.
pub const DEFAULT_REFERENCE_LIFE: f64 = 1_000_000.0;
/// Number of points on the Weibull failure curve handed to the reporting layer.
pub const DEFAULT_CURVE_POINTS: usize = 500;

/// Represents the configuration of a fatigue reliability analysis.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub material: Material,
    /// Already counted load spectrum, evaluated in the given order.
    pub load_blocks: Vec<LoadBlock>,
    pub reliability: Reliability,
    #[serde(default)]
    pub monte_carlo: MonteCarloConfig,
    /// Report format, "TEXT" or "JSON".
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_output() -> String {
    String::from("TEXT")
}

/// Report formats understood by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Config {
    /// Validates the entire configuration.
    ///
    /// Checks the material constants, every load block, the reliability
    /// settings, the Monte Carlo settings and the output format, in that order.
    pub fn validate(&self) -> error::Result<()> {
        self.material.validate()?;
        validate_spectrum(&self.load_blocks)?;
        self.reliability.validate()?;
        self.monte_carlo.validate()?;
        self.output_format()?;
        Ok(())
    }

    pub fn output_format(&self) -> Result<OutputFormat, ConfigurationError> {
        match self.output.as_str() {
            "TEXT" => Ok(OutputFormat::Text),
            "JSON" => Ok(OutputFormat::Json),
            _ => Err(ConfigurationError::InvalidOutput(self.output.clone())),
        }
    }
}

/// Represents the Weibull reliability settings.
///
/// The scale `eta` is not configured directly. It is derived from the
/// cumulative damage as `reference_life / max(D, damage_floor)`.
#[derive(Debug, Deserialize)]
pub struct Reliability {
    /// Weibull shape parameter. Must be greater than 0.0.
    pub beta: f64,
    /// Cycles represented by one full pass of unit damage. Must be greater than 0.0.
    #[serde(default = "default_reference_life")]
    pub reference_life: f64,
    /// Points sampled on the failure probability curve, at least 2.
    #[serde(default = "default_curve_points")]
    pub curve_points: usize,
}

fn default_reference_life() -> f64 {
    DEFAULT_REFERENCE_LIFE
}

fn default_curve_points() -> usize {
    DEFAULT_CURVE_POINTS
}

impl Reliability {
    /// Validates the `Reliability` settings.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if `beta` and `reference_life` are positive and
    /// `curve_points` is at least 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use fatigue_reliability::config::Reliability;
    ///
    /// let reliability = Reliability { beta: 1.6, reference_life: 1.0e6, curve_points: 500 };
    /// assert!(reliability.validate().is_ok());
    ///
    /// let invalid = Reliability { beta: 0.0, reference_life: 1.0e6, curve_points: 500 };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> error::Result<()> {
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(DomainError::NonPositiveShape(self.beta).into());
        }
        if !(self.reference_life.is_finite() && self.reference_life > 0.0) {
            return Err(ConfigurationError::NonPositiveReferenceLife(self.reference_life).into());
        }
        if self.curve_points < 2 {
            return Err(ConfigurationError::TooFewCurvePoints(self.curve_points).into());
        }
        Ok(())
    }
}

/// Loads the configuration from a YAML file, or a TOML file when the extension is `.toml`.
///
/// # Errors
///
/// This function will return an error if reading or parsing the configuration file fails.
/// The values are not validated; call [`Config::validate`] for that.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let path = config_path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    let is_toml = path.extension().map_or(false, |ext| ext == "toml");
    let config: Config = if is_toml {
        toml::from_str(&content).with_context(|| format!("failed to parse TOML {}", path.display()))?
    } else {
        serde_yaml::from_str(&content).with_context(|| format!("failed to parse YAML {}", path.display()))?
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_load_config() {
        let config = load_config("tests/config.yaml").expect("Failed to load config");
        assert!(config.validate().is_ok(), "Expected Ok(()) but got Err with {:?}", config.validate());
        assert_eq!(config.material.name, "AISI 1045 Steel");
        assert_eq!(config.load_blocks.len(), 3);
        assert_eq!(config.load_blocks[0], LoadBlock::new(320.0, 40.0, 120_000.0));
        assert_eq!(config.reliability.beta, 1.6);
        assert_eq!(config.monte_carlo.sample_count, 2_000);
        assert_eq!(config.monte_carlo.seed, Some(42));
        assert_eq!(config.output_format(), Ok(OutputFormat::Text));
    }

    #[test]
    fn test_load_toml_config_with_defaults() {
        let config = load_config("tests/config.toml").expect("Failed to load config");
        assert!(config.validate().is_ok());
        assert_eq!(config.reliability.reference_life, DEFAULT_REFERENCE_LIFE);
        assert_eq!(config.reliability.curve_points, DEFAULT_CURVE_POINTS);
        assert_eq!(config.monte_carlo, MonteCarloConfig::default());
        assert_eq!(config.output_format(), Ok(OutputFormat::Json));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_config("tests/does_not_exist.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read configuration"));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = load_config("tests/config.yaml").unwrap();
        config.load_blocks[1].cycles = 0.0;
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration(ConfigurationError::NonPositiveCycles { index: 1, .. }))
        ));

        let mut config = load_config("tests/config.yaml").unwrap();
        config.output = String::from("XML");
        assert_eq!(
            config.validate(),
            Err(Error::Configuration(ConfigurationError::InvalidOutput(String::from("XML"))))
        );

        let mut config = load_config("tests/config.yaml").unwrap();
        config.monte_carlo.sample_count = 0;
        assert_eq!(config.validate(), Err(Error::Configuration(ConfigurationError::ZeroSampleCount)));

        let mut config = load_config("tests/config.yaml").unwrap();
        config.material.basquin_exponent = 0.0;
        assert!(matches!(config.validate(), Err(Error::Domain(_))));
    }
}
