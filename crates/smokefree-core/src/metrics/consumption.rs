use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{days_from_ms, delta_ms, MAX_TRACKED_DAYS};

pub const DEFAULT_CIGARETTES_PER_DAY: u32 = 20;
pub const DEFAULT_COST_PER_PACK: f64 = 10.0;
pub const CIGARETTES_PER_PACK: u32 = 20;

/// Largest accepted daily consumption; larger values are clamped.
pub const MAX_CIGARETTES_PER_DAY: u32 = 200;
/// Largest accepted pack price; larger values are clamped.
pub const MAX_COST_PER_PACK: f64 = 1_000.0;
/// Cap on reported savings.
pub const MAX_MONEY_SAVED: f64 = 100_000_000.0;

/// User-editable smoking habits used to derive savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionProfile {
    pub cigarettes_per_day: u32,
    pub cost_per_pack: f64,
    #[serde(default = "default_cigarettes_per_pack")]
    pub cigarettes_per_pack: u32,
}

fn default_cigarettes_per_pack() -> u32 {
    CIGARETTES_PER_PACK
}

impl Default for ConsumptionProfile {
    fn default() -> Self {
        Self {
            cigarettes_per_day: DEFAULT_CIGARETTES_PER_DAY,
            cost_per_pack: DEFAULT_COST_PER_PACK,
            cigarettes_per_pack: CIGARETTES_PER_PACK,
        }
    }
}

impl ConsumptionProfile {
    /// Build a profile from stored string values.
    ///
    /// Absent, unparseable or non-positive cigarette counts and absent,
    /// unparseable, negative or non-finite prices fall back to defaults.
    pub fn from_raw(cigarettes_per_day: Option<&str>, cost_per_pack: Option<&str>) -> Self {
        let defaults = Self::default();

        let cigarettes_per_day = cigarettes_per_day
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map(|n| n.min(MAX_CIGARETTES_PER_DAY as i64) as u32)
            .unwrap_or(defaults.cigarettes_per_day);

        let cost_per_pack = cost_per_pack
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|c| c.is_finite() && *c >= 0.0)
            .map(|c| c.min(MAX_COST_PER_PACK))
            .unwrap_or(defaults.cost_per_pack);

        Self {
            cigarettes_per_day,
            cost_per_pack,
            cigarettes_per_pack: CIGARETTES_PER_PACK,
        }
    }

    /// Same rules as [`ConsumptionProfile::from_raw`], applied to an
    /// in-memory profile.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let cigarettes_per_day = match self.cigarettes_per_day {
            0 => defaults.cigarettes_per_day,
            n => n.min(MAX_CIGARETTES_PER_DAY),
        };
        let cost_per_pack = if self.cost_per_pack.is_finite() && self.cost_per_pack >= 0.0 {
            self.cost_per_pack.min(MAX_COST_PER_PACK)
        } else {
            defaults.cost_per_pack
        };
        let cigarettes_per_pack = match self.cigarettes_per_pack {
            0 => CIGARETTES_PER_PACK,
            n => n,
        };
        Self {
            cigarettes_per_day,
            cost_per_pack,
            cigarettes_per_pack,
        }
    }
}

/// Motivational counters derived from time since quitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionStats {
    pub cigarettes_avoided: u64,
    pub packs_avoided: u64,
    /// Rounded to cents, capped at [`MAX_MONEY_SAVED`].
    pub money_saved: f64,
    pub days_quit: u64,
}

/// Cigarettes and money not spent since `quit_instant`.
///
/// Never fails: a future quit instant, a non-finite intermediate or a
/// malformed profile all degrade to the zero result.
pub fn compute_consumption_stats(
    quit_instant: DateTime<Utc>,
    now: DateTime<Utc>,
    profile: &ConsumptionProfile,
) -> ConsumptionStats {
    let delta = delta_ms(quit_instant, now);
    if delta <= 0 {
        return ConsumptionStats::default();
    }

    let days = days_from_ms(delta);
    if !days.is_finite() || days < 0.0 {
        warn!(delta_ms = delta, "elapsed days not finite, reporting zero stats");
        return ConsumptionStats::default();
    }
    let days = days.min(MAX_TRACKED_DAYS);

    let profile = profile.sanitized();
    let cigarettes = (days * f64::from(profile.cigarettes_per_day)).floor();
    if !cigarettes.is_finite() || cigarettes < 0.0 {
        warn!(days, "cigarette count not finite, reporting zero stats");
        return ConsumptionStats::default();
    }

    let cigarettes_avoided = cigarettes as u64;
    let packs_avoided = cigarettes_avoided / u64::from(profile.cigarettes_per_pack);
    let money = (packs_avoided as f64 * profile.cost_per_pack).min(MAX_MONEY_SAVED);
    let money_saved = (money * 100.0).round() / 100.0;
    if !money_saved.is_finite() || money_saved < 0.0 {
        warn!(money, "money saved not finite, reporting zero stats");
        return ConsumptionStats::default();
    }

    ConsumptionStats {
        cigarettes_avoided,
        packs_avoided,
        money_saved,
        days_quit: days.floor() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn quit() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn seven_days_three_hours_with_defaults() {
        let now = quit() + Duration::days(7) + Duration::hours(3);
        let stats = compute_consumption_stats(quit(), now, &ConsumptionProfile::default());
        assert_eq!(stats.cigarettes_avoided, 142);
        assert_eq!(stats.packs_avoided, 7);
        assert_eq!(stats.money_saved, 70.0);
        assert_eq!(stats.days_quit, 7);
    }

    #[test]
    fn zero_and_future_are_degenerate() {
        let profile = ConsumptionProfile::default();
        assert_eq!(
            compute_consumption_stats(quit(), quit(), &profile),
            ConsumptionStats::default()
        );
        assert_eq!(
            compute_consumption_stats(quit(), quit() - Duration::days(3), &profile),
            ConsumptionStats::default()
        );
    }

    #[test]
    fn days_are_capped_at_a_century() {
        let now = quit() + Duration::days(200 * 365);
        let stats = compute_consumption_stats(quit(), now, &ConsumptionProfile::default());
        assert_eq!(stats.days_quit, 36_500);
        assert_eq!(stats.cigarettes_avoided, 36_500 * 20);
    }

    #[test]
    fn money_is_capped() {
        let now = quit() + Duration::days(200 * 365);
        let profile = ConsumptionProfile {
            cigarettes_per_day: MAX_CIGARETTES_PER_DAY,
            cost_per_pack: MAX_COST_PER_PACK,
            cigarettes_per_pack: 1,
        };
        let stats = compute_consumption_stats(quit(), now, &profile);
        assert_eq!(stats.money_saved, MAX_MONEY_SAVED);
    }

    #[test]
    fn malformed_profile_uses_defaults() {
        let now = quit() + Duration::days(1);
        let profile = ConsumptionProfile {
            cigarettes_per_day: 0,
            cost_per_pack: f64::NAN,
            cigarettes_per_pack: 0,
        };
        let stats = compute_consumption_stats(quit(), now, &profile);
        assert_eq!(stats.cigarettes_avoided, 20);
        assert_eq!(stats.packs_avoided, 1);
        assert_eq!(stats.money_saved, 10.0);
    }

    #[test]
    fn money_rounds_to_cents() {
        let now = quit() + Duration::days(3);
        let profile = ConsumptionProfile {
            cigarettes_per_day: 20,
            cost_per_pack: 8.333,
            cigarettes_per_pack: 20,
        };
        let stats = compute_consumption_stats(quit(), now, &profile);
        assert_eq!(stats.money_saved, 25.0);
    }

    #[test]
    fn from_raw_applies_defaults() {
        let p = ConsumptionProfile::from_raw(None, None);
        assert_eq!(p, ConsumptionProfile::default());

        let p = ConsumptionProfile::from_raw(Some("abc"), Some("-4"));
        assert_eq!(p, ConsumptionProfile::default());

        let p = ConsumptionProfile::from_raw(Some("0"), Some("NaN"));
        assert_eq!(p, ConsumptionProfile::default());

        let p = ConsumptionProfile::from_raw(Some(" 15 "), Some("12.50"));
        assert_eq!(p.cigarettes_per_day, 15);
        assert_eq!(p.cost_per_pack, 12.5);
    }

    #[test]
    fn from_raw_clamps_absurd_values() {
        let p = ConsumptionProfile::from_raw(Some("999999"), Some("1e12"));
        assert_eq!(p.cigarettes_per_day, MAX_CIGARETTES_PER_DAY);
        assert_eq!(p.cost_per_pack, MAX_COST_PER_PACK);
    }
}
