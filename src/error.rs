//! Error types for the period-spacing library.

use thiserror::Error;

/// Result type alias for period-spacing operations.
pub type Result<T> = std::result::Result<T, SpacingError>;

/// Errors that can occur while sampling, wrapping or scoring periods.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpacingError {
    /// Input data (values or candidate periods) is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Search range with `min >= max`.
    #[error("invalid period range: min {min} must be less than max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Input that makes the requested quantity undefined.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Check that `values` holds at least `needed` elements.
pub(crate) fn require_len(values: &[f64], needed: usize) -> Result<()> {
    if values.is_empty() {
        return Err(SpacingError::EmptyData);
    }
    if values.len() < needed {
        return Err(SpacingError::InsufficientData {
            needed,
            got: values.len(),
        });
    }
    Ok(())
}

/// Check that a trial period is finite and strictly positive.
pub(crate) fn require_period(period: f64) -> Result<()> {
    if period.is_finite() && period > 0.0 {
        Ok(())
    } else {
        Err(SpacingError::InvalidParameter(format!(
            "period must be finite and positive, got {}",
            period
        )))
    }
}
