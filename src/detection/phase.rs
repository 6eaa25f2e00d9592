//! Phase folding of epochs onto a trial period.
//!
//! Values are folded into [0, 1) by `(value mod period) / period`. Centering
//! then rotates the phases so that their circular mean lands on 0.5, which
//! keeps a single cluster from straddling the 0/1 boundary.

use crate::error::{require_len, require_period, Result};
use crate::utils::stats::circular_mean;
use std::f64::consts::{PI, TAU};
use tracing::debug;

/// Map a phase that rounded up to exactly 1.0 back onto 0.0.
#[inline]
fn fold_unit(phase: f64) -> f64 {
    if phase >= 1.0 {
        phase - 1.0
    } else {
        phase
    }
}

/// Wrap values onto a trial period.
///
/// # Arguments
/// * `values` - Epochs to fold
/// * `period` - Trial period (finite, positive)
/// * `centered` - Rotate the phases so their circular mean sits at 0.5
///
/// # Returns
/// One phase per value, each in [0, 1).
///
/// # Example
/// ```
/// use period_spacing::detection::wrap_phases;
///
/// let phases = wrap_phases(&[0.5, 1.5, 2.5], 1.0, false).unwrap();
/// assert_eq!(phases, vec![0.5, 0.5, 0.5]);
/// ```
pub fn wrap_phases(values: &[f64], period: f64, centered: bool) -> Result<Vec<f64>> {
    require_len(values, 1)?;
    require_period(period)?;

    let phases: Vec<f64> = values
        .iter()
        .map(|&v| fold_unit(v.rem_euclid(period) / period))
        .collect();

    if centered {
        Ok(center_phases(phases))
    } else {
        Ok(phases)
    }
}

/// Rotate phases so that their circular mean sits at phase 0.5.
///
/// Centering is skipped when the mean direction is undefined: if the mean
/// resultant length is at most `f64::EPSILON` (the phases balance out around
/// the circle) the phases are returned unchanged rather than rotated onto an
/// angle that is only rounding noise. Any larger resultant is centered, even
/// when it is itself mostly rounding residue.
pub fn center_phases(phases: Vec<f64>) -> Vec<f64> {
    let Some(mean) = circular_mean(&phases) else {
        debug!(
            n = phases.len(),
            "circular mean direction undefined; phases left uncentered"
        );
        return phases;
    };

    let offset = PI - mean.angle;
    phases
        .into_iter()
        .map(|p| fold_unit((p * TAU + offset).rem_euclid(TAU) / TAU))
        .collect()
}
