//! Candidate-period grids for spacing searches.
//!
//! The grid is uniform in frequency. Its step is the frequency resolution
//! implied by the observation baseline, `1 / (max - min)`, divided by an
//! oversampling factor, so that no true period falls between two neighbouring
//! candidates.

use crate::error::{require_len, Result, SpacingError};
use tracing::trace;

/// Default oversampling relative to the critical frequency step.
pub const DEFAULT_OVERSAMPLE_FACTOR: f64 = 10.0;

/// Upper bound on the number of candidates a single grid may hold.
pub const MAX_CANDIDATES: usize = 10_000_000;

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SpacingError::InvalidParameter(format!(
            "{} must be finite and positive, got {}",
            name, value
        )))
    }
}

/// Generate candidate periods between `min_period` and `max_period`.
///
/// Frequencies start at `1/min_period` and decrease in steps of
/// `resolution / oversample_factor` until they would pass `1/max_period`
/// (with a tolerance of a tenth of a step so the end point survives
/// rounding). Periods are returned in increasing order.
///
/// # Arguments
/// * `values` - Epochs being searched; only their range is used
/// * `min_period` - Shortest spacing to consider
/// * `max_period` - Longest spacing to consider
/// * `oversample_factor` - How much finer than critical sampling to step
///
/// # Errors
/// * `InvalidParameter` for non-positive or non-finite bounds or factor
/// * `InvalidRange` if `min_period >= max_period`
/// * `EmptyData` / `InsufficientData` for fewer than two values
/// * `DegenerateInput` if all values are identical, or the range is too small
///   for a finite frequency step
/// * `InvalidParameter` if the grid would exceed [`MAX_CANDIDATES`]
///
/// # Example
/// ```
/// use period_spacing::detection::period_sampling;
///
/// let values: Vec<f64> = (0..100).map(|i| 10.0 * i as f64).collect();
/// let periods = period_sampling(&values, 5.0, 20.0, 10.0).unwrap();
/// assert_eq!(periods[0], 5.0);
/// assert!(periods.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn period_sampling(
    values: &[f64],
    min_period: f64,
    max_period: f64,
    oversample_factor: f64,
) -> Result<Vec<f64>> {
    require_positive("min_period", min_period)?;
    require_positive("max_period", max_period)?;
    if min_period >= max_period {
        return Err(SpacingError::InvalidRange {
            min: min_period,
            max: max_period,
        });
    }
    require_positive("oversample_factor", oversample_factor)?;
    require_len(values, 2)?;

    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 {
        return Err(SpacingError::DegenerateInput(
            "values have zero range; frequency resolution is unbounded".to_string(),
        ));
    }

    let resolution = 1.0 / span;
    let step = resolution / oversample_factor;
    if !(resolution.is_finite() && step.is_finite() && step > 0.0) {
        return Err(SpacingError::DegenerateInput(format!(
            "values range {} gives no finite positive frequency step",
            span
        )));
    }

    let start = 1.0 / min_period;
    let stop = 1.0 / max_period - 0.1 * step;
    let count = ((start - stop) / step).ceil();
    if !count.is_finite() || count > MAX_CANDIDATES as f64 {
        return Err(SpacingError::InvalidParameter(format!(
            "grid of {} candidates exceeds the limit of {}",
            count, MAX_CANDIDATES
        )));
    }
    let len = count as usize;

    // Coarse grids may step past zero frequency; those have no period
    let periods: Vec<f64> = (0..len)
        .map(|i| start - i as f64 * step)
        .take_while(|&f| f > 0.0)
        .map(|f| 1.0 / f)
        .collect();

    trace!(
        candidates = periods.len(),
        resolution,
        oversample_factor,
        "sampled candidate periods"
    );

    Ok(periods)
}

/// [`period_sampling`] with [`DEFAULT_OVERSAMPLE_FACTOR`].
pub fn period_sampling_default(
    values: &[f64],
    min_period: f64,
    max_period: f64,
) -> Result<Vec<f64>> {
    period_sampling(values, min_period, max_period, DEFAULT_OVERSAMPLE_FACTOR)
}
