//! Inverse-variance period scorer.
//!
//! Scores each candidate by `1 / Var(phases)` of the wrapped values. Tightly
//! clustered phases give a small variance and a large score.

use super::executor::{score_each, validate_candidates};
use super::phase::wrap_phases;
use super::scorer::{PeriodScorer, ScoreDirection};
use crate::error::Result;
use crate::utils::stats::population_variance;
use tracing::debug;

/// Inverse-variance scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InverseVarianceScorer {
    /// Center phases on their circular mean before taking the variance
    pub centered: bool,
}

impl Default for InverseVarianceScorer {
    fn default() -> Self {
        Self { centered: true }
    }
}

impl InverseVarianceScorer {
    /// Create a scorer with explicit centering.
    pub fn new(centered: bool) -> Self {
        Self { centered }
    }

    /// Set centering
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }
}

impl PeriodScorer for InverseVarianceScorer {
    fn score(&self, values: &[f64], periods: &[f64]) -> Result<Vec<f64>> {
        inverse_variance(values, periods, self.centered)
    }

    fn name(&self) -> &'static str {
        "InverseVariance"
    }

    fn direction(&self) -> ScoreDirection {
        ScoreDirection::HigherIsStronger
    }
}

/// Inverse variance of the wrapped phases for each candidate period.
///
/// Zero variance (every value folds onto one phase) is reported as
/// `f64::INFINITY`.
///
/// # Arguments
/// * `values` - Epochs, at least two
/// * `periods` - Candidate periods, non-empty and positive
/// * `centered` - Center phases on 0.5 before measuring the spread
///
/// # Example
/// ```
/// use period_spacing::detection::inverse_variance;
///
/// let values = vec![0.0, 1.0, 2.0, 3.0];
/// let scores = inverse_variance(&values, &[4.0], false).unwrap();
/// assert!((scores[0] - 12.8).abs() < 1e-9);
/// ```
pub fn inverse_variance(values: &[f64], periods: &[f64], centered: bool) -> Result<Vec<f64>> {
    validate_candidates(values, periods, 2)?;

    score_each(periods, |period| {
        let wrapped = wrap_phases(values, period, centered)?;
        let variance = population_variance(&wrapped);
        if variance == 0.0 {
            debug!(period, "zero phase variance; inverse variance is unbounded");
            return Ok(f64::INFINITY);
        }
        Ok(1.0 / variance)
    })
}
