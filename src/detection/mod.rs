//! Period-spacing detection.
//!
//! This module provides the building blocks of a period search:
//! - [`period_sampling`]: candidate-period grid from the observation baseline
//! - [`wrap_phases`]: folding of epochs onto a trial period, optionally centered
//! - [`inverse_variance`]: inverse variance of the wrapped phases
//! - [`ks_log_pvalue`]: log10 p-value of a KS uniformity test of the phases
//! - [`fourier_power`]: single-frequency DFT power at irregular sample times
//!
//! Each scorer is also available as a [`PeriodScorer`] implementation, and
//! [`PeriodSearch`] chains sampling and scoring.

mod executor;
mod fourier;
mod inverse_variance;
mod kolmogorov_smirnov;
mod phase;
mod sampling;
mod scorer;
mod search;

pub use fourier::{fourier_power, FourierPowerScorer};
pub use inverse_variance::{inverse_variance, InverseVarianceScorer};
pub use kolmogorov_smirnov::{ks_log_pvalue, ks_log_pvalue_with_method, KolmogorovSmirnovScorer};
pub use phase::{center_phases, wrap_phases};
pub use sampling::{
    period_sampling, period_sampling_default, DEFAULT_OVERSAMPLE_FACTOR, MAX_CANDIDATES,
};
pub use scorer::{PeriodScorer, ScoreDirection};
pub use search::{PeriodScores, PeriodSearch};
