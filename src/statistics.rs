//! Summary statistics of a life distribution.

use serde::Serialize;

use crate::error::ConfigurationError;

/// Mean, spread and percentiles of a set of life samples, in cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator).
    pub std_dev: f64,
    /// Standard error of the mean, `std_dev / √n`.
    pub standard_error: f64,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

impl LifeSummary {
    pub fn from_samples(samples: &[f64]) -> Result<Self, ConfigurationError> {
        if samples.is_empty() {
            return Err(ConfigurationError::NoSamples);
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std_dev = if count > 1 {
            (sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Ok(LifeSummary {
            count,
            mean,
            std_dev,
            standard_error: std_dev / n.sqrt(),
            p5: sorted_percentile(&sorted, 5.0),
            p50: sorted_percentile(&sorted, 50.0),
            p95: sorted_percentile(&sorted, 95.0),
        })
    }
}

/// Percentile `p` (0..=100) of `samples`, linearly interpolated between closest ranks.
pub fn percentile(samples: &[f64], p: f64) -> Result<f64, ConfigurationError> {
    if samples.is_empty() {
        return Err(ConfigurationError::NoSamples);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(ConfigurationError::InvalidPercentile(p));
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted_percentile(&sorted, p))
}

fn sorted_percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percentile_interpolates() {
        let samples = [4.0, 1.0, 3.0, 2.0, 5.0];
        assert_relative_eq!(percentile(&samples, 0.0).unwrap(), 1.0);
        assert_relative_eq!(percentile(&samples, 50.0).unwrap(), 3.0);
        assert_relative_eq!(percentile(&samples, 100.0).unwrap(), 5.0);
        assert_relative_eq!(percentile(&samples, 5.0).unwrap(), 1.2, epsilon = 1e-12);
        assert_relative_eq!(percentile(&samples, 95.0).unwrap(), 4.8, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_rejects_bad_input() {
        assert_eq!(percentile(&[], 50.0), Err(ConfigurationError::NoSamples));
        assert_eq!(percentile(&[1.0], 101.0), Err(ConfigurationError::InvalidPercentile(101.0)));
    }

    #[test]
    fn test_summary() {
        let summary = LifeSummary::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.count, 8);
        assert_relative_eq!(summary.mean, 5.0);
        assert_relative_eq!(summary.std_dev, (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.standard_error, summary.std_dev / 8.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.p50, 4.5);
        assert!(summary.p5 <= summary.p50 && summary.p50 <= summary.p95);
    }

    #[test]
    fn test_single_sample_summary() {
        let summary = LifeSummary::from_samples(&[3.0]).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.p5, 3.0);
        assert_eq!(summary.p95, 3.0);
        assert_eq!(LifeSummary::from_samples(&[]), Err(ConfigurationError::NoSamples));
    }
}
