//! Statistical tests used to judge wrapped phases.
//!
//! # Example
//!
//! ```
//! use period_spacing::validation::{ks_uniform, KsMethod};
//!
//! // Phases spread evenly over the unit interval
//! let phases: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 20.0).collect();
//! let result = ks_uniform(&phases, KsMethod::Auto).unwrap();
//! assert!(!result.rejects_uniformity(0.05));
//! ```

pub mod uniformity;

pub use uniformity::{ks_statistic_uniform, ks_uniform, KsMethod, KsTestResult};
