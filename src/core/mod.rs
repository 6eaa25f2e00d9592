//! Input preparation for period searches.

mod epochs;

pub use epochs::{epochs_from_timestamps, TimeUnit};
