//! Sample-then-score convenience pipeline.

use super::sampling::{period_sampling, DEFAULT_OVERSAMPLE_FACTOR};
use super::scorer::{PeriodScorer, ScoreDirection};
use crate::error::Result;
use tracing::trace;

/// Candidate periods together with their scores from one scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodScores {
    /// Candidate periods, in sampler order
    pub periods: Vec<f64>,
    /// One score per candidate period
    pub scores: Vec<f64>,
    /// Name of the scorer used
    pub method: String,
    /// Direction in which the scores improve
    pub direction: ScoreDirection,
}

impl PeriodScores {
    /// Number of candidates scored
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Iterate over `(period, score)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.periods.iter().copied().zip(self.scores.iter().copied())
    }
}

/// Configuration of a period-spacing search.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSearch {
    /// Shortest spacing to consider
    pub min_period: f64,
    /// Longest spacing to consider
    pub max_period: f64,
    /// Oversampling relative to the critical frequency step
    pub oversample_factor: f64,
}

impl PeriodSearch {
    /// Create a search over `[min_period, max_period]` with the default oversampling.
    pub fn new(min_period: f64, max_period: f64) -> Self {
        Self {
            min_period,
            max_period,
            oversample_factor: DEFAULT_OVERSAMPLE_FACTOR,
        }
    }

    /// Set oversampling factor
    pub fn with_oversample_factor(mut self, factor: f64) -> Self {
        self.oversample_factor = factor;
        self
    }

    /// Candidate periods for `values`.
    pub fn candidates(&self, values: &[f64]) -> Result<Vec<f64>> {
        period_sampling(
            values,
            self.min_period,
            self.max_period,
            self.oversample_factor,
        )
    }

    /// Sample candidate periods for `values` and score them.
    ///
    /// No best period is chosen; callers inspect the returned scores.
    ///
    /// # Example
    /// ```
    /// use period_spacing::detection::{FourierPowerScorer, PeriodSearch};
    ///
    /// let values: Vec<f64> = (0..60).map(|i| 7.0 * i as f64).collect();
    /// let result = PeriodSearch::new(4.0, 12.0)
    ///     .with_oversample_factor(5.0)
    ///     .run(&values, &FourierPowerScorer)
    ///     .unwrap();
    /// assert_eq!(result.periods.len(), result.scores.len());
    /// assert_eq!(result.method, "FourierPower");
    /// ```
    pub fn run<S>(&self, values: &[f64], scorer: &S) -> Result<PeriodScores>
    where
        S: PeriodScorer + ?Sized,
    {
        let periods = self.candidates(values)?;
        let scores = scorer.score(values, &periods)?;
        trace!(
            method = scorer.name(),
            candidates = periods.len(),
            "scored candidate periods"
        );

        Ok(PeriodScores {
            periods,
            scores,
            method: scorer.name().to_string(),
            direction: scorer.direction(),
        })
    }
}
