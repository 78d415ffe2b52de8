//! Temporal metrics engine.
//!
//! Pure functions over a quit instant and a "now" instant. No hidden state,
//! no I/O: calling any of them twice with the same inputs yields the same
//! record. All arithmetic runs on signed epoch-millisecond deltas, so local
//! offsets and DST never enter the picture.
//!
//! A quit instant in the future is not an error here. Every function clamps
//! it to the degenerate (all-zero) result.

mod benefits;
mod consumption;
mod elapsed;
mod health;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub use benefits::{achieved_count, compute_benefit_progress, BenefitProgress};
pub use consumption::{compute_consumption_stats, ConsumptionProfile, ConsumptionStats};
pub use elapsed::{compute_elapsed, ElapsedMetrics};
pub use health::{compute_health_regeneration, HealthRegeneration};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Upper bound on tracked days (~100 years). Guards consumption stats
/// against corrupted or adversarial stored dates.
pub const MAX_TRACKED_DAYS: f64 = 36_500.0;

/// The moment the user quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuitEvent {
    pub quit_instant: DateTime<Utc>,
}

impl QuitEvent {
    pub fn new(quit_instant: DateTime<Utc>) -> Self {
        Self { quit_instant }
    }

    /// Parse a stored ISO-8601 timestamp.
    ///
    /// Accepts RFC 3339 with any offset (normalized to UTC) and naive
    /// `YYYY-MM-DDTHH:MM[:SS]` forms, which are taken as UTC. Anything else is
    /// treated as unset.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::new(dt.with_timezone(&Utc)));
        }
        const NAIVE_FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
        ];
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| Self::new(naive.and_utc()))
    }

    /// Canonical storage form: RFC 3339, UTC, millisecond precision.
    pub fn to_iso(&self) -> String {
        self.quit_instant
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Every output record, computed at a single instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub at: DateTime<Utc>,
    pub quit_instant: DateTime<Utc>,
    pub elapsed: ElapsedMetrics,
    pub stats: ConsumptionStats,
    pub health: HealthRegeneration,
    pub benefits: Vec<BenefitProgress>,
}

impl Snapshot {
    pub fn compute(quit: &QuitEvent, now: DateTime<Utc>, profile: &ConsumptionProfile) -> Self {
        let quit_instant = quit.quit_instant;
        Self {
            at: now,
            quit_instant,
            elapsed: compute_elapsed(quit_instant, now),
            stats: compute_consumption_stats(quit_instant, now, profile),
            health: compute_health_regeneration(quit_instant, now),
            benefits: compute_benefit_progress(quit_instant, now),
        }
    }

    pub fn achieved_benefits(&self) -> usize {
        achieved_count(&self.benefits)
    }
}

/// Signed milliseconds from `quit_instant` to `now`.
pub(crate) fn delta_ms(quit_instant: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(quit_instant).num_milliseconds()
}

/// Fractional days for a positive delta.
pub(crate) fn days_from_ms(delta_ms: i64) -> f64 {
    delta_ms as f64 / MS_PER_DAY as f64
}

/// Fractional days to whole milliseconds.
pub(crate) fn ms_from_days(days: f64) -> i64 {
    (days * MS_PER_DAY as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn parse_rfc3339_normalizes_to_utc() {
        let quit = QuitEvent::parse("2024-03-10T08:30:00+02:00").unwrap();
        assert_eq!(
            quit.quit_instant,
            Utc.with_ymd_and_hms(2024, 3, 10, 6, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_naive_is_utc() {
        let quit = QuitEvent::parse("2024-03-10T08:30").unwrap();
        assert_eq!(
            quit.quit_instant,
            Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap()
        );
        assert!(QuitEvent::parse("2024-03-10 08:30:15").is_some());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(QuitEvent::parse("").is_none());
        assert!(QuitEvent::parse("   ").is_none());
        assert!(QuitEvent::parse("yesterday").is_none());
        assert!(QuitEvent::parse("2024-13-40T99:00").is_none());
    }

    #[test]
    fn iso_form_reparses() {
        let quit = QuitEvent::new(Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(quit.to_iso(), "2023-01-02T03:04:05.000Z");
        assert_eq!(QuitEvent::parse(&quit.to_iso()), Some(quit));
    }

    #[test]
    fn snapshot_is_consistent_with_individual_functions() {
        let quit = QuitEvent::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let now = quit.quit_instant + Duration::days(21);
        let profile = ConsumptionProfile::default();
        let snap = Snapshot::compute(&quit, now, &profile);

        assert_eq!(snap.elapsed, compute_elapsed(quit.quit_instant, now));
        assert_eq!(snap.stats, compute_consumption_stats(quit.quit_instant, now, &profile));
        assert_eq!(snap.health.percentage, 32);
        assert_eq!(snap.benefits.len(), crate::milestones::BENEFITS.len());
        assert!(snap.achieved_benefits() > 0);
    }
}
