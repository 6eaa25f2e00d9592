//! # period-spacing
//!
//! Search for the characteristic spacing of clustered events in a
//! one-dimensional series of epochs.
//!
//! A search sweeps a grid of candidate periods, folds the epochs onto each
//! one and scores how unevenly the folded phases are spread. Three
//! independent scorers are provided: inverse phase variance, a
//! Kolmogorov-Smirnov uniformity test and single-frequency Fourier power for
//! irregular sampling.
//!
//! ```
//! use period_spacing::prelude::*;
//!
//! let epochs: Vec<f64> = (0..100).map(|i| 10.0 * i as f64).collect();
//! let periods = period_sampling(&epochs, 5.0, 20.0, 10.0).unwrap();
//! let power = fourier_power(&epochs, &periods).unwrap();
//! assert_eq!(power.len(), periods.len());
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod detection;
pub mod error;
pub mod utils;
pub mod validation;

pub use error::{Result, SpacingError};

pub mod prelude {
    pub use crate::core::{epochs_from_timestamps, TimeUnit};
    pub use crate::detection::{
        fourier_power, inverse_variance, ks_log_pvalue, period_sampling, wrap_phases,
        FourierPowerScorer, InverseVarianceScorer, KolmogorovSmirnovScorer, PeriodScorer,
        PeriodSearch, ScoreDirection,
    };
    pub use crate::error::{Result, SpacingError};
    pub use crate::validation::KsMethod;
}
