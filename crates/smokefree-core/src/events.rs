use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::metrics::ElapsedMetrics;

/// A display value the scheduler tracks and diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayField {
    CigarettesAvoided,
    PacksAvoided,
    MoneySaved,
    DaysQuit,
    HealthPercentage,
    NextMilestone,
    TimeUntilNextMilestone,
    BenefitsAchieved,
}

impl DisplayField {
    /// Fields refreshed on every tick.
    pub const FAST: [DisplayField; 4] = [
        DisplayField::CigarettesAvoided,
        DisplayField::PacksAvoided,
        DisplayField::MoneySaved,
        DisplayField::DaysQuit,
    ];

    /// Fields refreshed on the slow cadence.
    pub const SLOW: [DisplayField; 4] = [
        DisplayField::HealthPercentage,
        DisplayField::NextMilestone,
        DisplayField::TimeUntilNextMilestone,
        DisplayField::BenefitsAchieved,
    ];
}

/// Everything the scheduler tells the display layer.
/// The renderer applies these in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Tracking began (or restarted) for a quit instant.
    SchedulerStarted {
        quit_instant: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    /// The running clock. Sent on every tick.
    ElapsedTick {
        elapsed: ElapsedMetrics,
        display: String,
        at: DateTime<Utc>,
    },
    /// A derived value whose formatted text changed.
    FieldChanged {
        field: DisplayField,
        value: String,
        at: DateTime<Utc>,
    },
    /// A benefit whose progress changed.
    BenefitChanged {
        name: &'static str,
        progress_percent: u8,
        at: DateTime<Utc>,
    },
    /// View hidden; ticking stopped.
    SchedulerSuspended {
        at: DateTime<Utc>,
    },
    /// View shown again; an immediate refresh follows.
    SchedulerResumed {
        at: DateTime<Utc>,
    },
    SchedulerStopped {
        at: DateTime<Utc>,
    },
}
