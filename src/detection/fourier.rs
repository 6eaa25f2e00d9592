//! Fourier power period scorer for irregularly sampled epochs.
//!
//! Each candidate period is scored by the squared amplitude of the best-fit
//! zero-mean sinusoid at frequency `1/period`, obtained from a single-frequency
//! discrete Fourier transform evaluated directly at the sample times. The
//! epochs need not lie on a regular grid, so this is a plain trigonometric sum
//! rather than an FFT.

use super::executor::{score_each, validate_candidates};
use super::scorer::{PeriodScorer, ScoreDirection};
use crate::error::Result;
use std::f64::consts::TAU;

/// Constant window weight per sample; every epoch counts equally.
const WINDOW_WEIGHT: f64 = 0.5;

/// Fourier power scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FourierPowerScorer;

impl PeriodScorer for FourierPowerScorer {
    fn score(&self, values: &[f64], periods: &[f64]) -> Result<Vec<f64>> {
        fourier_power(values, periods)
    }

    fn name(&self) -> &'static str {
        "FourierPower"
    }

    fn direction(&self) -> ScoreDirection {
        ScoreDirection::HigherIsStronger
    }
}

/// Squared best-fit sinusoid amplitude at each candidate period.
///
/// For angular frequency `ω = 2π/period` the window-weighted projections
/// `C = Σ 0.5·cos(ω·tᵢ)` and `S = Σ 0.5·sin(ω·tᵢ)` give the amplitude
/// `(2/N)·√(C² + S²)`, which is then squared. Scores are always ≥ 0.
///
/// # Example
/// ```
/// use period_spacing::detection::fourier_power;
///
/// let values: Vec<f64> = (0..20).map(|i| 4.0 * i as f64).collect();
/// let power = fourier_power(&values, &[4.0]).unwrap();
/// assert!((power[0] - 1.0).abs() < 1e-12);
/// ```
pub fn fourier_power(values: &[f64], periods: &[f64]) -> Result<Vec<f64>> {
    validate_candidates(values, periods, 1)?;

    let scale = 2.0 / values.len() as f64;
    score_each(periods, |period| {
        let omega = TAU * (1.0 / period);
        let (cos_amp, sin_amp) = values.iter().fold((0.0, 0.0), |(c, s), &t| {
            let angle = omega * t;
            (c + angle.cos() * WINDOW_WEIGHT, s + angle.sin() * WINDOW_WEIGHT)
        });
        let amplitude = scale * (cos_amp * cos_amp + sin_amp * sin_amp).sqrt();
        Ok(amplitude * amplitude)
    })
}
