use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{delta_ms, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Time since quitting, split into clock components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedMetrics {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub total_milliseconds: u64,
}

/// Decompose `now - quit_instant` into days/hours/minutes/seconds.
///
/// Zero or negative deltas yield all-zero metrics.
pub fn compute_elapsed(quit_instant: DateTime<Utc>, now: DateTime<Utc>) -> ElapsedMetrics {
    let delta = delta_ms(quit_instant, now);
    if delta <= 0 {
        return ElapsedMetrics::default();
    }

    ElapsedMetrics {
        days: (delta / MS_PER_DAY) as u64,
        hours: ((delta % MS_PER_DAY) / MS_PER_HOUR) as u8,
        minutes: ((delta % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
        seconds: ((delta % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        total_milliseconds: delta as u64,
    }
}
