//! Two-parameter Weibull reliability model.
//!
//! Time is measured in load cycles. Negative times are rejected rather than
//! clamped to zero: a negative cycle count is a caller bug, not a boundary case.

use serde::Serialize;
use statrs::function::gamma::gamma;

use crate::damage::floored_damage;
use crate::error::{ConfigurationError, DomainError, Result};

/// Shape `beta` and cycles-valued scale `eta`, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeibullParameters {
    pub beta: f64,
    pub eta: f64,
}

impl WeibullParameters {
    pub fn new(beta: f64, eta: f64) -> std::result::Result<Self, DomainError> {
        validate_parameters(beta, eta)?;
        Ok(WeibullParameters { beta, eta })
    }

    /// Scale derived from cumulative damage: `eta = reference_life / max(D, floor)`.
    ///
    /// A spectrum consuming a fraction `D` of life per pass survives
    /// `1 / D` passes; `reference_life` converts passes into cycles.
    pub fn from_damage(beta: f64, damage: f64, reference_life: f64, floor: f64) -> Result<Self> {
        if !(reference_life.is_finite() && reference_life > 0.0) {
            return Err(ConfigurationError::NonPositiveReferenceLife(reference_life).into());
        }
        if !(floor.is_finite() && floor > 0.0) {
            return Err(ConfigurationError::NonPositiveDamageFloor(floor).into());
        }
        let eta = reference_life / floored_damage(damage, floor);
        Ok(WeibullParameters::new(beta, eta)?)
    }

    pub fn failure_probability(&self, times: &[f64]) -> std::result::Result<Vec<f64>, DomainError> {
        failure_probability(times, self.beta, self.eta)
    }

    pub fn reliability(&self, times: &[f64]) -> std::result::Result<Vec<f64>, DomainError> {
        reliability(times, self.beta, self.eta)
    }

    pub fn mtbf(&self) -> f64 {
        self.eta * gamma(1.0 + 1.0 / self.beta)
    }

    /// Evaluates the failure probability at `points` evenly spaced times on `[0, 2 eta]`.
    ///
    /// Returns `(time, probability)` pairs, ready for plotting.
    pub fn failure_curve(&self, points: usize) -> Result<Vec<(f64, f64)>> {
        if points < 2 {
            return Err(ConfigurationError::TooFewCurvePoints(points).into());
        }
        let step = 2.0 * self.eta / (points - 1) as f64;
        let times: Vec<f64> = (0..points).map(|i| i as f64 * step).collect();
        let probabilities = self.failure_probability(&times)?;
        Ok(times.into_iter().zip(probabilities).collect())
    }
}

fn validate_parameters(beta: f64, eta: f64) -> std::result::Result<(), DomainError> {
    if !(beta.is_finite() && beta > 0.0) {
        return Err(DomainError::NonPositiveShape(beta));
    }
    if !(eta.is_finite() && eta > 0.0) {
        return Err(DomainError::NonPositiveScale(eta));
    }
    Ok(())
}

fn cdf(t: f64, beta: f64, eta: f64) -> std::result::Result<f64, DomainError> {
    if t.is_nan() || t < 0.0 {
        return Err(DomainError::NegativeTime(t));
    }
    Ok(1.0 - (-(t / eta).powf(beta)).exp())
}

/// Weibull CDF `1 − exp(−(t/η)^β)` evaluated at every time in `times`.
///
/// The output has the same length and order as `times`. Any negative time
/// fails the whole call.
pub fn failure_probability(times: &[f64], beta: f64, eta: f64) -> std::result::Result<Vec<f64>, DomainError> {
    validate_parameters(beta, eta)?;
    times.iter().map(|&t| cdf(t, beta, eta)).collect()
}

/// Survival function `exp(−(t/η)^β)`, the complement of [`failure_probability`].
pub fn reliability(times: &[f64], beta: f64, eta: f64) -> std::result::Result<Vec<f64>, DomainError> {
    Ok(failure_probability(times, beta, eta)?
        .into_iter()
        .map(|f| 1.0 - f)
        .collect())
}

/// Mean time between failures, `η · Γ(1 + 1/β)`.
pub fn mtbf(beta: f64, eta: f64) -> std::result::Result<f64, DomainError> {
    Ok(WeibullParameters::new(beta, eta)?.mtbf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_probability_at_scale() {
        let expected = 1.0 - (-1.0_f64).exp();
        for beta in [0.5, 1.0, 1.6, 3.0, 10.0] {
            let p = failure_probability(&[8.3e6], beta, 8.3e6).unwrap();
            assert_relative_eq!(p[0], expected, epsilon = 1e-12);
        }
        assert_relative_eq!(expected, 0.6321, epsilon = 1e-4);
    }

    #[test]
    fn test_probability_broadcasts_and_is_monotone() {
        let times = [0.0, 1e5, 1e6, 5e6, 2e7];
        let p = failure_probability(&times, 1.6, 5e6).unwrap();
        assert_eq!(p.len(), times.len());
        assert_eq!(p[0], 0.0);
        assert!(p.windows(2).all(|w| w[0] < w[1]));
        assert!(p.iter().all(|&x| (0.0..=1.0).contains(&x)));
        assert!(failure_probability(&[], 1.6, 5e6).unwrap().is_empty());
    }

    #[test]
    fn test_negative_time_rejected() {
        assert_eq!(
            failure_probability(&[10.0, -1.0, 20.0], 1.6, 100.0),
            Err(DomainError::NegativeTime(-1.0))
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert_eq!(failure_probability(&[1.0], 0.0, 100.0), Err(DomainError::NonPositiveShape(0.0)));
        assert_eq!(failure_probability(&[1.0], 1.6, -5.0), Err(DomainError::NonPositiveScale(-5.0)));
        assert!(mtbf(-1.0, 100.0).is_err());
        assert!(mtbf(1.0, 0.0).is_err());
    }

    #[test]
    fn test_reliability_complements_probability() {
        let params = WeibullParameters::new(2.0, 1000.0).unwrap();
        let times = [0.0, 500.0, 1000.0, 1500.0];
        let f = params.failure_probability(&times).unwrap();
        let r = params.reliability(&times).unwrap();
        for (a, b) in f.iter().zip(r.iter()) {
            assert_relative_eq!(a + b, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mtbf() {
        assert_relative_eq!(mtbf(1.0, 8.3e6).unwrap(), 8.3e6, max_relative = 1e-10);
        // Γ(1.5) = √π / 2
        assert_relative_eq!(
            mtbf(2.0, 1000.0).unwrap(),
            1000.0 * std::f64::consts::PI.sqrt() / 2.0,
            max_relative = 1e-10
        );
        assert_relative_eq!(mtbf(1.6, 8298866.961227619).unwrap(), 7440550.671048141, max_relative = 1e-8);
    }

    #[test]
    fn test_from_damage() {
        let params = WeibullParameters::from_damage(1.6, 0.1204983770280942, 1e6, 1e-6).unwrap();
        assert_relative_eq!(params.eta, 8298866.961227619, max_relative = 1e-12);

        let floored = WeibullParameters::from_damage(1.6, 0.0, 1e6, 1e-6).unwrap();
        assert_relative_eq!(floored.eta, 1e12, max_relative = 1e-12);

        assert_eq!(
            WeibullParameters::from_damage(1.6, 0.1, 0.0, 1e-6),
            Err(Error::Configuration(ConfigurationError::NonPositiveReferenceLife(0.0)))
        );
        assert!(WeibullParameters::from_damage(0.0, 0.1, 1e6, 1e-6).is_err());
    }

    #[test]
    fn test_failure_curve_spans_two_scales() {
        let params = WeibullParameters::new(1.6, 1000.0).unwrap();
        let curve = params.failure_curve(5).unwrap();
        assert_eq!(curve.len(), 5);
        assert_eq!(curve[0], (0.0, 0.0));
        assert_relative_eq!(curve[2].0, 1000.0);
        assert_relative_eq!(curve[2].1, 1.0 - (-1.0_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(curve[4].0, 2000.0);
        assert!(params.failure_curve(1).is_err());
    }
}
