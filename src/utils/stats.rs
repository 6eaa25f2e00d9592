//! Statistical utility functions.

use std::f64::consts::TAU;

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population variance of a slice (denominator `n`).
///
/// This is the spread of the phases themselves rather than an estimate of a
/// wider population, so no Bessel correction is applied.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Mean direction of a set of unit-interval phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularMean {
    /// Mean angle in radians, in (-π, π].
    pub angle: f64,
    /// Length of the mean resultant vector (0 to 1).
    pub resultant_length: f64,
}

impl CircularMean {
    /// Mean direction expressed as a phase in [0, 1).
    pub fn phase(&self) -> f64 {
        let phase = self.angle.rem_euclid(TAU) / TAU;
        if phase >= 1.0 {
            0.0
        } else {
            phase
        }
    }
}

/// Circular mean of phases in [0, 1).
///
/// Each phase is treated as a unit vector at angle `2π·phase`; the mean
/// direction is the angle of the averaged vector.
///
/// Returns `None` for empty input or when the mean resultant length is not
/// above `f64::EPSILON`, in which case the direction is undefined.
pub fn circular_mean(phases: &[f64]) -> Option<CircularMean> {
    if phases.is_empty() {
        return None;
    }
    let n = phases.len() as f64;
    let (sum_cos, sum_sin) = phases.iter().fold((0.0, 0.0), |(c, s), &p| {
        let angle = p * TAU;
        (c + angle.cos(), s + angle.sin())
    });
    let mean_x = sum_cos / n;
    let mean_y = sum_sin / n;
    let resultant_length = mean_x.hypot(mean_y);
    if resultant_length <= f64::EPSILON {
        return None;
    }

    Some(CircularMean {
        angle: mean_y.atan2(mean_x),
        resultant_length,
    })
}
