//! Error types for the fatigue and reliability computations.
//!
//! Two families are kept apart: a [`DomainError`] means the physics was asked
//! for something it cannot answer (a mean stress at or beyond the ultimate
//! strength, a non-positive equivalent stress, ...), while a
//! [`ConfigurationError`] means the caller handed in a malformed request.

use thiserror::Error;

/// Invalid physical input to one of the pure fatigue functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("mean stress {mean} equals the ultimate strength {ultimate}, equivalent stress is infinite")]
    MeanStressAtUltimate { mean: f64, ultimate: f64 },

    #[error("mean stress {mean} exceeds the ultimate strength {ultimate}, equivalent stress would be negative")]
    MeanStressAboveUltimate { mean: f64, ultimate: f64 },

    #[error("equivalent stress must be greater than 0.0, got {0}")]
    NonPositiveEquivalentStress(f64),

    #[error("Weibull shape beta must be greater than 0.0, got {0}")]
    NonPositiveShape(f64),

    #[error("Weibull scale eta must be greater than 0.0, got {0}")]
    NonPositiveScale(f64),

    #[error("time must not be negative, got {0}")]
    NegativeTime(f64),

    #[error("material {field} is invalid, got {value}")]
    InvalidMaterial { field: &'static str, value: f64 },

    #[error("sampled strength scale must be finite and greater than 0.0, got {0}")]
    InvalidStrengthScale(f64),
}

/// Malformed request: bad load block, bad simulation settings, bad config file values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("sample_count must be greater than 0")]
    ZeroSampleCount,

    #[error("load block {index}: cycles must be greater than 0.0, got {cycles}")]
    NonPositiveCycles { index: usize, cycles: f64 },

    #[error("load block {index}: sigma_max {sigma_max} is less than sigma_min {sigma_min}")]
    InvertedBlock { index: usize, sigma_max: f64, sigma_min: f64 },

    #[error("load block {index}: stresses must be finite")]
    NonFiniteStress { index: usize },

    #[error("strength scatter needs a positive finite mean and a non-negative finite std, got mean {mean}, std {std}")]
    InvalidScatter { mean: f64, std: f64 },

    #[error("damage_floor must be greater than 0.0, got {0}")]
    NonPositiveDamageFloor(f64),

    #[error("reference_life must be greater than 0.0, got {0}")]
    NonPositiveReferenceLife(f64),

    #[error("curve needs at least 2 points, got {0}")]
    TooFewCurvePoints(usize),

    #[error("life summary needs at least one sample")]
    NoSamples,

    #[error("percentile must be between 0.0 and 100.0, got {0}")]
    InvalidPercentile(f64),

    #[error("output must be TEXT or JSON, got {0}")]
    InvalidOutput(String),
}

/// Any failure the core can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

pub type Result<T> = std::result::Result<T, Error>;
