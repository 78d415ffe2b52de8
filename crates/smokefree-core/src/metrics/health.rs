use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::{days_from_ms, delta_ms, ms_from_days};
use crate::milestones::{MilestoneDefinition, HEALTH_MILESTONES};

/// Aggregate recovery estimate along the milestone curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthRegeneration {
    /// 0-100.
    pub percentage: u8,
    pub elapsed_days: u64,
    /// `None` once every milestone has been reached.
    pub next_milestone: Option<&'static MilestoneDefinition>,
    pub time_until_next_milestone_ms: Option<u64>,
}

impl HealthRegeneration {
    pub fn time_until_next_milestone(&self) -> Option<Duration> {
        self.time_until_next_milestone_ms
            .map(|ms| Duration::milliseconds(ms as i64))
    }

    fn degenerate(table: &'static [MilestoneDefinition]) -> Self {
        let first = table.first();
        Self {
            percentage: 0,
            elapsed_days: 0,
            next_milestone: first,
            time_until_next_milestone_ms: first.map(|m| ms_from_days(m.target_days).max(0) as u64),
        }
    }
}

/// Interpolate aggregate health recovery for the time since `quit_instant`.
pub fn compute_health_regeneration(
    quit_instant: DateTime<Utc>,
    now: DateTime<Utc>,
) -> HealthRegeneration {
    regeneration_along(HEALTH_MILESTONES, delta_ms(quit_instant, now))
}

/// Piecewise-linear position of `delta_ms` on `table`.
///
/// `table` must be sorted ascending by `target_days`. Before the first
/// entry the curve starts from an implicit (0 days, 0%) origin.
pub(crate) fn regeneration_along(
    table: &'static [MilestoneDefinition],
    delta_ms: i64,
) -> HealthRegeneration {
    if delta_ms <= 0 {
        return HealthRegeneration::degenerate(table);
    }
    let days = days_from_ms(delta_ms);
    if !days.is_finite() {
        return HealthRegeneration::degenerate(table);
    }

    let next_index = table.iter().position(|m| m.target_days > days);
    let (percent, next_milestone) = match next_index {
        None => {
            let percent = table
                .last()
                .map(|m| f64::from(m.cumulative_progress_percent))
                .unwrap_or(0.0);
            (percent, None)
        }
        Some(index) => {
            let next = &table[index];
            let (floor_days, floor_percent) = match index.checked_sub(1).map(|i| &table[i]) {
                Some(floor) => (floor.target_days, f64::from(floor.cumulative_progress_percent)),
                None => (0.0, 0.0),
            };
            let span = next.target_days - floor_days;
            let fraction = if span > 0.0 {
                (days - floor_days) / span
            } else {
                0.0
            };
            let rise = f64::from(next.cumulative_progress_percent) - floor_percent;
            (floor_percent + rise * fraction, Some(next))
        }
    };

    let time_until_next_milestone_ms =
        next_milestone.map(|m| (ms_from_days(m.target_days) - delta_ms).max(0) as u64);

    HealthRegeneration {
        percentage: percent.round().clamp(0.0, 100.0) as u8,
        elapsed_days: days.floor() as u64,
        next_milestone,
        time_until_next_milestone_ms,
    }
}
