//! Date mock values

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::rng::{RngError, Seed, Stream};

/// 2000-01-01T00:00:00Z
const DEFAULT_FROM_MS: i64 = 946_684_800_000;

/// 2030-01-01T00:00:00Z
const DEFAULT_TO_MS: i64 = 1_893_456_000_000;

/// Options for [`date_between_in`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOptions {
    pub seed: Option<Seed>,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            from: DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(DEFAULT_FROM_MS),
            to: DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(DEFAULT_TO_MS),
        }
    }
}

/// Uniform instant between `from` and `to`, both inclusive, at millisecond
/// resolution. Inverted ranges are swapped.
pub fn date_between_in(rng: &mut Stream, opts: &DateOptions) -> Result<DateTime<Utc>, RngError> {
    let from = opts.from.timestamp_millis();
    let to = opts.to.timestamp_millis();
    let ms = rng.int(from as f64, to as f64)?;
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| RngError::InvalidOption(format!("timestamp {}ms out of range", ms)))
}
