//! Live update scheduling.
//!
//! [`UpdateScheduler`] is a wall-clock-based state machine with no internal
//! thread: the caller hands it the current instant on every tick and
//! forwards the returned [`Event`](crate::Event)s to the display. The tokio
//! driver in [`spawn_tracker`] owns a scheduler and ticks it once a second.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped -> Running <-> Suspended
//!    ^          |            |
//!    +----------+------------+
//! ```

mod driver;
mod engine;

use chrono::{DateTime, Utc};

pub use driver::{spawn_tracker, TrackerCommand, TrackerHandle};
pub use engine::{
    SchedulerState, TickHandle, UpdateScheduler, SLOW_UPDATE_INTERVAL_MS, TICK_INTERVAL,
};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
