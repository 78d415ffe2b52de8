//! Static milestone and benefit catalogs.
//!
//! Two read-only tables drive the health side of the engine:
//!
//! - [`HEALTH_MILESTONES`]: the aggregate recovery curve, sorted ascending by
//!   `target_days`. The interpolation in [`crate::metrics`] scans it
//!   sequentially, so the ordering is load-bearing.
//! - [`BENEFITS`]: individual benefits, in no particular order. Anything
//!   presented to a user goes through [`benefits_sorted`].

mod catalog;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use catalog::{BENEFITS, HEALTH_MILESTONES};

/// Body system a benefit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitCategory {
    Heart,
    Lung,
    Body,
    Sex,
    Mind,
}

impl BenefitCategory {
    pub const ALL: [BenefitCategory; 5] = [
        BenefitCategory::Heart,
        BenefitCategory::Lung,
        BenefitCategory::Body,
        BenefitCategory::Sex,
        BenefitCategory::Mind,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitCategory::Heart => "Heart",
            BenefitCategory::Lung => "Lung",
            BenefitCategory::Body => "Body",
            BenefitCategory::Sex => "Sex",
            BenefitCategory::Mind => "Mind",
        }
    }

    /// Case-insensitive parse. Returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for BenefitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A point on the aggregate health-recovery curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MilestoneDefinition {
    /// Offset from the quit instant, in (fractional) days.
    pub target_days: f64,
    /// Aggregate recovery reached at `target_days` (0-100).
    pub cumulative_progress_percent: u8,
    pub label: &'static str,
}

/// A single named health improvement with its own progress curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenefitDefinition {
    pub name: &'static str,
    pub category: BenefitCategory,
    /// Human-readable timeframe, e.g. "2 weeks".
    pub timeframe: &'static str,
    /// Offset from the quit instant in days. Zero means immediate.
    pub target_days: f64,
    pub details: &'static str,
}

/// All benefits sorted ascending by `target_days`.
///
/// The sort is stable, so benefits sharing a target keep catalog order.
pub fn benefits_sorted() -> Vec<&'static BenefitDefinition> {
    let mut sorted: Vec<&'static BenefitDefinition> = BENEFITS.iter().collect();
    sorted.sort_by(|a, b| a.target_days.total_cmp(&b.target_days));
    sorted
}

/// Benefits of one category, sorted ascending by `target_days`.
pub fn benefits_in(category: BenefitCategory) -> Vec<&'static BenefitDefinition> {
    benefits_sorted()
        .into_iter()
        .filter(|b| b.category == category)
        .collect()
}

/// Look up a benefit by exact name.
pub fn find_benefit(name: &str) -> Option<&'static BenefitDefinition> {
    BENEFITS.iter().find(|b| b.name == name)
}

/// Check the structural invariants both tables rely on.
///
/// # Errors
///
/// Returns the first violated invariant: milestone days not strictly
/// increasing, percentages decreasing or above 100, the curve not ending at
/// 100, negative or non-finite benefit targets, or duplicate benefit names.
pub fn validate_catalog() -> Result<(), ValidationError> {
    validate_milestones(HEALTH_MILESTONES)?;
    validate_benefits(BENEFITS)
}

pub(crate) fn validate_milestones(table: &[MilestoneDefinition]) -> Result<(), ValidationError> {
    let Some(last) = table.last() else {
        return Err(ValidationError::InvalidValue {
            field: "health_milestones".into(),
            message: "table is empty".into(),
        });
    };

    for (index, pair) in table.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.target_days.partial_cmp(&prev.target_days) != Some(Ordering::Greater) {
            return Err(ValidationError::OutOfOrder {
                catalog: "milestone",
                index: index + 1,
                message: format!(
                    "target_days {} does not follow {}",
                    next.target_days, prev.target_days
                ),
            });
        }
        if next.cumulative_progress_percent < prev.cumulative_progress_percent {
            return Err(ValidationError::OutOfOrder {
                catalog: "milestone",
                index: index + 1,
                message: format!(
                    "progress {}% is below previous {}%",
                    next.cumulative_progress_percent, prev.cumulative_progress_percent
                ),
            });
        }
    }

    if last.cumulative_progress_percent != 100 {
        return Err(ValidationError::InvalidValue {
            field: "health_milestones".into(),
            message: format!(
                "final milestone reaches {}%, expected 100%",
                last.cumulative_progress_percent
            ),
        });
    }
    Ok(())
}

pub(crate) fn validate_benefits(table: &[BenefitDefinition]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for benefit in table {
        if !benefit.target_days.is_finite() || benefit.target_days < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: benefit.name.into(),
                message: format!("target_days {} is not a valid offset", benefit.target_days),
            });
        }
        if !seen.insert(benefit.name) {
            return Err(ValidationError::Duplicate {
                catalog: "benefit",
                name: benefit.name,
            });
        }
    }
    Ok(())
}
