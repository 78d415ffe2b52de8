//! Property tests for the metrics engine.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use smokefree_core::{
    compute_benefit_progress, compute_consumption_stats, compute_elapsed,
    compute_health_regeneration, ConsumptionProfile, BENEFITS, HEALTH_MILESTONES,
};

const MS_PER_DAY: i64 = 86_400_000;

fn quit() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}

fn at(ms: i64) -> DateTime<Utc> {
    quit() + Duration::milliseconds(ms)
}

/// Offsets from ten days before quitting to ~120 years after.
fn arb_offset_ms() -> impl Strategy<Value = i64> {
    prop_oneof![
        -10 * MS_PER_DAY..0i64,
        0i64..MS_PER_DAY,
        0i64..60 * MS_PER_DAY,
        0i64..120 * 365 * MS_PER_DAY,
    ]
}

fn arb_profile() -> impl Strategy<Value = ConsumptionProfile> {
    (0u32..1_000, -50.0f64..5_000.0).prop_map(|(cigarettes_per_day, cost_per_pack)| {
        ConsumptionProfile {
            cigarettes_per_day,
            cost_per_pack,
            cigarettes_per_pack: 20,
        }
    })
}

proptest! {
    #[test]
    fn elapsed_total_matches_delta(offset in 0i64..120 * 365 * MS_PER_DAY) {
        let e = compute_elapsed(quit(), at(offset));
        prop_assert_eq!(e.total_milliseconds, offset as u64);
        let rebuilt = e.days as i64 * MS_PER_DAY
            + e.hours as i64 * 3_600_000
            + e.minutes as i64 * 60_000
            + e.seconds as i64 * 1_000;
        prop_assert!(offset - rebuilt < 1_000);
        prop_assert!(e.hours < 24 && e.minutes < 60 && e.seconds < 60);
    }

    #[test]
    fn before_quit_everything_is_zero(offset in -10 * MS_PER_DAY..=0i64, profile in arb_profile()) {
        let now = at(offset);
        prop_assert_eq!(compute_elapsed(quit(), now).total_milliseconds, 0);
        prop_assert_eq!(compute_consumption_stats(quit(), now, &profile).cigarettes_avoided, 0);
        prop_assert_eq!(compute_health_regeneration(quit(), now).percentage, 0);
        let benefits = compute_benefit_progress(quit(), now);
        prop_assert!(benefits.iter().all(|b| b.progress_percent == 0));
        prop_assert!(benefits.windows(2).all(|w| w[0].target_days <= w[1].target_days));
    }

    #[test]
    fn health_and_benefits_are_monotonic(a in arb_offset_ms(), b in arb_offset_ms()) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };

        let h1 = compute_health_regeneration(quit(), at(earlier));
        let h2 = compute_health_regeneration(quit(), at(later));
        prop_assert!(h1.percentage <= h2.percentage);
        prop_assert!(h2.percentage <= 100);

        let p1 = compute_benefit_progress(quit(), at(earlier));
        let p2 = compute_benefit_progress(quit(), at(later));
        prop_assert_eq!(p1.len(), BENEFITS.len());
        for (x, y) in p1.iter().zip(p2.iter()) {
            prop_assert_eq!(x.name, y.name);
            prop_assert!(x.progress_percent <= y.progress_percent);
            prop_assert!(y.progress_percent <= 100);
        }
    }

    #[test]
    fn stats_stay_bounded_and_consistent(offset in arb_offset_ms(), profile in arb_profile()) {
        let stats = compute_consumption_stats(quit(), at(offset), &profile);
        prop_assert!(stats.money_saved.is_finite() && stats.money_saved >= 0.0);
        prop_assert!(stats.days_quit <= 36_500);
        prop_assert_eq!(stats.packs_avoided, stats.cigarettes_avoided / 20);
        prop_assert!(stats.cigarettes_avoided <= 36_500 * 200);
    }

    #[test]
    fn compute_functions_are_pure(offset in arb_offset_ms(), profile in arb_profile()) {
        let now = at(offset);
        prop_assert_eq!(compute_elapsed(quit(), now), compute_elapsed(quit(), now));
        prop_assert_eq!(
            compute_consumption_stats(quit(), now, &profile),
            compute_consumption_stats(quit(), now, &profile)
        );
        prop_assert_eq!(
            compute_health_regeneration(quit(), now),
            compute_health_regeneration(quit(), now)
        );
        prop_assert_eq!(
            compute_benefit_progress(quit(), now),
            compute_benefit_progress(quit(), now)
        );
    }
}

#[test]
fn whole_day_milestones_hit_exact_percentages() {
    for m in HEALTH_MILESTONES.iter().filter(|m| m.target_days.fract() == 0.0) {
        let now = quit() + Duration::days(m.target_days as i64);
        assert_eq!(
            compute_health_regeneration(quit(), now).percentage,
            m.cumulative_progress_percent,
            "{}",
            m.label
        );
    }
}

#[test]
fn whole_day_benefits_reach_100_at_target() {
    for b in BENEFITS.iter().filter(|b| b.target_days >= 1.0 && b.target_days.fract() == 0.0) {
        let now = quit() + Duration::days(b.target_days as i64);
        let progress = compute_benefit_progress(quit(), now);
        let entry = progress.iter().find(|p| p.name == b.name).unwrap();
        assert_eq!(entry.progress_percent, 100, "{}", b.name);
    }
}
