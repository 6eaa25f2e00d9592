//! Numeric helpers shared by the period scorers.

pub mod kolmogorov;
pub mod stats;

pub use kolmogorov::{kolmogorov_asymptotic_sf, kolmogorov_sf, smirnov_sf};
pub use stats::{circular_mean, mean, population_variance, CircularMean};
