use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{days_from_ms, delta_ms};
use crate::milestones::{benefits_sorted, BenefitCategory, BenefitDefinition};

/// One benefit with its progress toward `target_days`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitProgress {
    pub name: &'static str,
    pub category: BenefitCategory,
    pub timeframe: &'static str,
    pub target_days: f64,
    pub details: &'static str,
    /// 0-100.
    pub progress_percent: u8,
}

impl BenefitProgress {
    fn new(benefit: &BenefitDefinition, progress_percent: u8) -> Self {
        Self {
            name: benefit.name,
            category: benefit.category,
            timeframe: benefit.timeframe,
            target_days: benefit.target_days,
            details: benefit.details,
            progress_percent,
        }
    }

    pub fn is_achieved(&self) -> bool {
        self.progress_percent >= 100
    }
}

/// Progress for every catalog benefit, sorted ascending by `target_days`.
///
/// A zero or negative delta yields every benefit at 0%.
pub fn compute_benefit_progress(
    quit_instant: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Vec<BenefitProgress> {
    let delta = delta_ms(quit_instant, now);
    let days = if delta > 0 { days_from_ms(delta) } else { 0.0 };

    benefits_sorted()
        .into_iter()
        .map(|b| BenefitProgress::new(b, progress_percent(b.target_days, days)))
        .collect()
}

/// Number of benefits at 100%.
pub fn achieved_count(progress: &[BenefitProgress]) -> usize {
    progress.iter().filter(|p| p.is_achieved()).count()
}

fn progress_percent(target_days: f64, days: f64) -> u8 {
    if !days.is_finite() || days <= 0.0 {
        return 0;
    }
    // immediate benefits
    if target_days <= 0.0 {
        return 100;
    }
    let percent = (days / target_days * 100.0).round();
    if percent.is_finite() {
        percent.clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ms_from_days;
    use crate::milestones::BENEFITS;
    use chrono::{Duration, TimeZone};

    fn quit() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn find<'a>(progress: &'a [BenefitProgress], name: &str) -> &'a BenefitProgress {
        progress.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn libido_complete_at_two_weeks() {
        let progress = compute_benefit_progress(quit(), quit() + Duration::days(14));
        assert_eq!(find(&progress, "Improved Libido").progress_percent, 100);
        assert_eq!(find(&progress, "Greater Sexual Stamina").progress_percent, 47);
    }

    #[test]
    fn degenerate_is_all_zero_and_sorted() {
        for now in [quit(), quit() - Duration::days(1)] {
            let progress = compute_benefit_progress(quit(), now);
            assert!(progress.iter().all(|p| p.progress_percent == 0));
            assert!(progress
                .windows(2)
                .all(|w| w[0].target_days <= w[1].target_days));
        }
    }

    #[test]
    fn immediate_benefits_complete_after_any_time() {
        let progress = compute_benefit_progress(quit(), quit() + Duration::milliseconds(1));
        let immediate: Vec<_> = progress.iter().filter(|p| p.target_days == 0.0).collect();
        assert!(!immediate.is_empty());
        assert!(immediate.iter().all(|p| p.is_achieved()));
    }

    #[test]
    fn every_benefit_boundary_reaches_100() {
        for b in BENEFITS.iter().filter(|b| b.target_days > 0.0) {
            let now = quit() + Duration::milliseconds(ms_from_days(b.target_days));
            let progress = compute_benefit_progress(quit(), now);
            assert_eq!(find(&progress, b.name).progress_percent, 100, "{}", b.name);
        }
    }

    #[test]
    fn sub_day_benefits_are_halfway_at_half_target() {
        let progress = compute_benefit_progress(quit(), quit() + Duration::minutes(10));
        assert_eq!(find(&progress, "Blood Pressure Drops").progress_percent, 50);
    }

    #[test]
    fn progress_is_capped() {
        let progress = compute_benefit_progress(quit(), quit() + Duration::days(40_000));
        assert_eq!(achieved_count(&progress), progress.len());
    }

    #[test]
    fn progress_percent_rounds() {
        assert_eq!(progress_percent(3.0, 1.0), 33);
        assert_eq!(progress_percent(3.0, 2.0), 67);
        assert_eq!(progress_percent(0.0, 0.0), 0);
        assert_eq!(progress_percent(5.0, f64::INFINITY), 0);
    }
}
