//! Basquin stress-life relation.

use crate::error::DomainError;

/// Cycles to failure under a fully-reversed amplitude `sigma_eq`.
///
/// Basquin's law `σeq = σf · N^b` inverted to `N = (σeq/σf)^(1/b)`, which is
/// `(σf/σeq)^(-1/b)`. With the usual negative exponent, life grows as the
/// amplitude drops below σf. The exponent sign is not assumed; `b == 0` has
/// no inverse and is rejected.
pub fn fatigue_cycles(sigma_f: f64, b: f64, sigma_eq: f64) -> Result<f64, DomainError> {
    if !(sigma_eq > 0.0) {
        return Err(DomainError::NonPositiveEquivalentStress(sigma_eq));
    }
    if !(sigma_f.is_finite() && sigma_f > 0.0) {
        return Err(DomainError::InvalidMaterial { field: "fatigue_strength_coefficient", value: sigma_f });
    }
    if !b.is_finite() || b == 0.0 {
        return Err(DomainError::InvalidMaterial { field: "basquin_exponent", value: b });
    }
    Ok((sigma_eq / sigma_f).powf(1.0 / b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_amplitude_at_coefficient_is_one_cycle() {
        assert_relative_eq!(fatigue_cycles(900.0, -0.11, 900.0).unwrap(), 1.0);
    }

    #[test]
    fn test_life_falls_as_amplitude_rises() {
        let low = fatigue_cycles(900.0, -0.11, 150.0).unwrap();
        let high = fatigue_cycles(900.0, -0.11, 200.0).unwrap();
        assert!(low > high);
        assert_relative_eq!(low / high, (200.0_f64 / 150.0).powf(1.0 / 0.11), max_relative = 1e-9);
    }

    #[test]
    fn test_life_strictly_decreasing_over_amplitude_sweep() {
        let lives: Vec<f64> = (1..=40)
            .map(|i| fatigue_cycles(900.0, -0.11, 25.0 * i as f64).unwrap())
            .collect();
        assert!(lives.windows(2).all(|w| w[0] > w[1]));
        // Basquin forward relation recovers the amplitude
        for (i, n) in lives.iter().enumerate() {
            assert_relative_eq!(900.0 * n.powf(-0.11), 25.0 * (i + 1) as f64, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_known_value() {
        // 10^6 cycles at σf · (10^6)^b
        let sigma_eq = 900.0 * 1e6_f64.powf(-0.11);
        assert_relative_eq!(fatigue_cycles(900.0, -0.11, sigma_eq).unwrap(), 1e6, max_relative = 1e-9);
    }

    #[test]
    fn test_non_positive_equivalent_stress_fails() {
        assert_eq!(
            fatigue_cycles(900.0, -0.11, 0.0),
            Err(DomainError::NonPositiveEquivalentStress(0.0))
        );
        assert!(fatigue_cycles(900.0, -0.11, -10.0).is_err());
        assert!(fatigue_cycles(900.0, -0.11, f64::NAN).is_err());
    }

    #[test]
    fn test_zero_exponent_fails() {
        assert!(fatigue_cycles(900.0, 0.0, 100.0).is_err());
    }
}
