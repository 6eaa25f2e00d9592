//! Conversion of wall-clock event timestamps into numeric epochs.

use crate::error::{Result, SpacingError};
use chrono::{DateTime, Duration, Utc};

/// Unit in which epochs are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
    /// Any positive duration, e.g. `Duration::weeks(1)`.
    Custom(Duration),
}

impl TimeUnit {
    /// Length of one unit in seconds.
    pub fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Days => 86_400.0,
            TimeUnit::Custom(d) => duration_seconds(*d),
        }
    }
}

fn duration_seconds(d: Duration) -> f64 {
    d.num_seconds() as f64 + d.subsec_nanos() as f64 * 1e-9
}

/// Convert timestamps into epochs relative to the earliest timestamp.
///
/// Input order is preserved; only the origin moves. Period scores are
/// unaffected by the origin, while offsets near zero keep full `f64`
/// precision for long-running event logs.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use period_spacing::core::{epochs_from_timestamps, TimeUnit};
///
/// let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let stamps = vec![base, base + chrono::Duration::minutes(90)];
/// let epochs = epochs_from_timestamps(&stamps, TimeUnit::Hours).unwrap();
/// assert_eq!(epochs, vec![0.0, 1.5]);
/// ```
pub fn epochs_from_timestamps(timestamps: &[DateTime<Utc>], unit: TimeUnit) -> Result<Vec<f64>> {
    let Some(origin) = timestamps.iter().min().copied() else {
        return Err(SpacingError::EmptyData);
    };

    let unit_seconds = unit.seconds();
    if !(unit_seconds.is_finite() && unit_seconds > 0.0) {
        return Err(SpacingError::InvalidParameter(format!(
            "time unit must be a positive duration, got {} s",
            unit_seconds
        )));
    }

    Ok(timestamps
        .iter()
        .map(|t| duration_seconds(*t - origin) / unit_seconds)
        .collect())
}
