//! Common interface of the period scorers.

use crate::error::Result;

/// Which end of a score sequence indicates a stronger periodicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDirection {
    /// Larger scores mean tighter clustering (inverse variance, Fourier power)
    HigherIsStronger,
    /// Smaller scores mean tighter clustering (log10 p-value)
    LowerIsStronger,
}

/// Trait for period scorers.
///
/// A scorer maps a value sequence and a candidate-period sequence to one
/// score per candidate, positionally aligned with the candidates. Scores from
/// different scorers are not comparable with each other.
pub trait PeriodScorer: Sync {
    /// Score every candidate period against the values.
    fn score(&self, values: &[f64], periods: &[f64]) -> Result<Vec<f64>>;

    /// Get the name of this scoring method
    fn name(&self) -> &'static str;

    /// Direction in which scores improve.
    fn direction(&self) -> ScoreDirection;
}
