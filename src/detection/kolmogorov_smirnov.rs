//! Kolmogorov-Smirnov period scorer.
//!
//! Scores each candidate by `log10(p)`, where `p` is the p-value of a
//! one-sample KS test of the wrapped phases against U(0, 1). Working in log
//! space keeps p-values spanning dozens of orders of magnitude comparable and
//! away from underflow; more negative scores mean stronger evidence of
//! clustering at that period.

use super::executor::{score_each, validate_candidates};
use super::phase::wrap_phases;
use super::scorer::{PeriodScorer, ScoreDirection};
use crate::error::Result;
use crate::validation::uniformity::{ks_uniform, KsMethod};
use tracing::debug;

/// Kolmogorov-Smirnov scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KolmogorovSmirnovScorer {
    /// Center phases on their circular mean before testing
    pub centered: bool,
    /// Distribution used for the p-value
    pub method: KsMethod,
}

impl Default for KolmogorovSmirnovScorer {
    fn default() -> Self {
        Self {
            centered: true,
            method: KsMethod::Auto,
        }
    }
}

impl KolmogorovSmirnovScorer {
    /// Create a scorer with explicit centering and the automatic method.
    pub fn new(centered: bool) -> Self {
        Self {
            centered,
            ..Self::default()
        }
    }

    /// Set centering
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Set the p-value method
    pub fn with_method(mut self, method: KsMethod) -> Self {
        self.method = method;
        self
    }
}

impl PeriodScorer for KolmogorovSmirnovScorer {
    fn score(&self, values: &[f64], periods: &[f64]) -> Result<Vec<f64>> {
        ks_log_pvalue_with_method(values, periods, self.centered, self.method)
    }

    fn name(&self) -> &'static str {
        "KolmogorovSmirnov"
    }

    fn direction(&self) -> ScoreDirection {
        ScoreDirection::LowerIsStronger
    }
}

/// `log10` of the KS uniformity p-value for each candidate period.
///
/// Scores are always ≤ 0. A p-value of exactly zero is reported as
/// `f64::NEG_INFINITY`.
///
/// # Example
/// ```
/// use period_spacing::detection::ks_log_pvalue;
///
/// let values: Vec<f64> = (0..40).map(|i| 5.0 * i as f64).collect();
/// let scores = ks_log_pvalue(&values, &[5.0, 7.3], true).unwrap();
/// assert!(scores[0] < scores[1]);
/// assert!(scores.iter().all(|s| *s <= 0.0));
/// ```
pub fn ks_log_pvalue(values: &[f64], periods: &[f64], centered: bool) -> Result<Vec<f64>> {
    ks_log_pvalue_with_method(values, periods, centered, KsMethod::Auto)
}

/// [`ks_log_pvalue`] with an explicit p-value method.
pub fn ks_log_pvalue_with_method(
    values: &[f64],
    periods: &[f64],
    centered: bool,
    method: KsMethod,
) -> Result<Vec<f64>> {
    validate_candidates(values, periods, 2)?;

    score_each(periods, |period| {
        let wrapped = wrap_phases(values, period, centered)?;
        let result = ks_uniform(&wrapped, method)?;
        if result.p_value <= 0.0 {
            debug!(
                period,
                statistic = result.statistic,
                "KS p-value underflowed to zero"
            );
            return Ok(f64::NEG_INFINITY);
        }
        Ok(result.p_value.log10())
    })
}
