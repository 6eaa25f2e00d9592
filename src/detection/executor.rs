//! Per-candidate evaluation shared by all scorers.
//!
//! Candidate periods are scored independently, so with the `parallel`
//! feature the map runs on rayon's pool. Results are collected in candidate
//! order either way, and the first error aborts the collection.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{require_len, require_period, Result, SpacingError};

/// Validate the inputs common to every scorer.
pub(crate) fn validate_candidates(
    values: &[f64],
    periods: &[f64],
    min_values: usize,
) -> Result<()> {
    require_len(values, min_values)?;
    if periods.is_empty() {
        return Err(SpacingError::EmptyData);
    }
    periods.iter().try_for_each(|&p| require_period(p))
}

/// Evaluate `score` for every candidate period, preserving order.
#[cfg(feature = "parallel")]
pub(crate) fn score_each<F>(periods: &[f64], score: F) -> Result<Vec<f64>>
where
    F: Fn(f64) -> Result<f64> + Send + Sync,
{
    periods.par_iter().map(|&period| score(period)).collect()
}

/// Evaluate `score` for every candidate period, preserving order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn score_each<F>(periods: &[f64], score: F) -> Result<Vec<f64>>
where
    F: Fn(f64) -> Result<f64> + Send + Sync,
{
    periods.iter().map(|&period| score(period)).collect()
}
