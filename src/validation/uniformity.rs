//! One-sample Kolmogorov-Smirnov test against the uniform distribution.
//!
//! Used to judge whether wrapped phases are spread evenly over [0, 1) or
//! cluster somewhere on the unit circle.

use crate::error::{require_len, Result};
use crate::utils::kolmogorov::{kolmogorov_asymptotic_sf, kolmogorov_sf};

/// How the p-value of the KS statistic is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KsMethod {
    /// Exact distribution at every sample size.
    #[default]
    Auto,
    /// Exact finite-sample distribution of Dₙ.
    Exact,
    /// Kolmogorov limit distribution of √n·Dₙ.
    Asymptotic,
}

impl KsMethod {
    fn resolve(self) -> KsMethod {
        match self {
            KsMethod::Auto => KsMethod::Exact,
            other => other,
        }
    }
}

/// KS uniformity test result.
#[derive(Debug, Clone, PartialEq)]
pub struct KsTestResult {
    /// Two-sided statistic Dₙ
    pub statistic: f64,
    /// P-value in [0, 1]
    pub p_value: f64,
    /// Sample size
    pub n: usize,
    /// Method actually used (never `Auto`)
    pub method: KsMethod,
}

impl KsTestResult {
    /// Check whether uniformity is rejected at the given significance level.
    pub fn rejects_uniformity(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Two-sided KS distance between the empirical CDF of `sample` and U(0, 1).
///
/// Values outside [0, 1] are compared against the clamped uniform CDF.
/// Returns `NaN` for an empty sample.
pub fn ks_statistic_uniform(sample: &[f64]) -> f64 {
    let n = sample.len();
    if n == 0 {
        return f64::NAN;
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let nf = n as f64;
    sorted
        .iter()
        .enumerate()
        .fold(0.0_f64, |d, (i, &x)| {
            let cdf = x.clamp(0.0, 1.0);
            let d_plus = (i + 1) as f64 / nf - cdf;
            let d_minus = cdf - i as f64 / nf;
            d.max(d_plus).max(d_minus)
        })
}

/// Perform the one-sample KS test of `sample` against U(0, 1).
///
/// # Arguments
/// * `sample` - Observations, typically wrapped phases
/// * `method` - Distribution used for the p-value
///
/// # Returns
/// `KsTestResult` with statistic and p-value, or `EmptyData` for an empty sample.
///
/// # Example
/// ```
/// use period_spacing::validation::{ks_uniform, KsMethod};
///
/// let clustered = vec![0.49, 0.5, 0.5, 0.51, 0.5, 0.5, 0.49, 0.51];
/// let result = ks_uniform(&clustered, KsMethod::Auto).unwrap();
/// assert!(result.rejects_uniformity(0.05));
/// ```
pub fn ks_uniform(sample: &[f64], method: KsMethod) -> Result<KsTestResult> {
    require_len(sample, 1)?;

    let n = sample.len();
    let statistic = ks_statistic_uniform(sample);
    let method = method.resolve();
    let p_value = match method {
        KsMethod::Asymptotic => kolmogorov_asymptotic_sf((n as f64).sqrt() * statistic),
        _ => kolmogorov_sf(n, statistic),
    };

    Ok(KsTestResult {
        statistic,
        p_value,
        n,
        method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpacingError;
    use approx::assert_relative_eq;

    #[test]
    fn statistic_of_single_point() {
        assert_relative_eq!(ks_statistic_uniform(&[0.5]), 0.5, epsilon = 1e-12);
        assert_relative_eq!(ks_statistic_uniform(&[0.1]), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn statistic_of_evenly_spread_sample() {
        // Midpoints of 10 equal bins: D = 1/(2n)
        let sample: Vec<f64> = (0..10).map(|i| (i as f64 + 0.5) / 10.0).collect();
        assert_relative_eq!(ks_statistic_uniform(&sample), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn statistic_ignores_input_order() {
        let a = ks_statistic_uniform(&[0.9, 0.1, 0.4, 0.3]);
        let b = ks_statistic_uniform(&[0.1, 0.3, 0.4, 0.9]);
        assert_eq!(a, b);
    }

    #[test]
    fn evenly_spread_sample_is_not_rejected() {
        let sample: Vec<f64> = (0..50).map(|i| (i as f64 + 0.5) / 50.0).collect();
        let result = ks_uniform(&sample, KsMethod::Auto).unwrap();
        assert_eq!(result.p_value, 1.0);
        assert!(!result.rejects_uniformity(0.05));
        assert_eq!(result.method, KsMethod::Exact);
        assert_eq!(result.n, 50);
    }

    #[test]
    fn tight_cluster_is_rejected() {
        let sample = vec![0.5; 40];
        let result = ks_uniform(&sample, KsMethod::Exact).unwrap();
        assert_relative_eq!(result.statistic, 0.5, epsilon = 1e-12);
        assert!(result.p_value > 0.0);
        assert!(result.rejects_uniformity(1e-6));
    }

    #[test]
    fn asymptotic_method_close_to_exact_for_moderate_n() {
        let sample: Vec<f64> = (0..400).map(|i| (i as f64 / 400.0).powf(1.2)).collect();
        let exact = ks_uniform(&sample, KsMethod::Exact).unwrap();
        let asymptotic = ks_uniform(&sample, KsMethod::Asymptotic).unwrap();
        assert_eq!(asymptotic.method, KsMethod::Asymptotic);
        assert_relative_eq!(exact.p_value, asymptotic.p_value, epsilon = 0.02);
    }

    #[test]
    fn auto_resolves_to_exact() {
        assert_eq!(KsMethod::Auto.resolve(), KsMethod::Exact);
        assert_eq!(KsMethod::Exact.resolve(), KsMethod::Exact);
        assert_eq!(KsMethod::Asymptotic.resolve(), KsMethod::Asymptotic);
    }

    #[test]
    fn auto_matches_exact_p_value_for_large_samples() {
        // Slightly non-uniform sample of 20 000 points, D ≈ 0.011
        let n = 20_000;
        let sample: Vec<f64> = (0..n)
            .map(|i| ((i as f64 + 0.5) / n as f64).powf(1.03))
            .collect();
        let auto = ks_uniform(&sample, KsMethod::Auto).unwrap();
        let exact = ks_uniform(&sample, KsMethod::Exact).unwrap();
        let asymptotic = ks_uniform(&sample, KsMethod::Asymptotic).unwrap();

        assert_eq!(auto.method, KsMethod::Exact);
        assert_eq!(auto.p_value, exact.p_value);
        assert_ne!(auto.p_value, asymptotic.p_value);
    }

    #[test]
    fn empty_sample_is_an_error() {
        assert_eq!(ks_uniform(&[], KsMethod::Auto), Err(SpacingError::EmptyData));
    }
}
