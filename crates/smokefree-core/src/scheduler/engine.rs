use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::events::{DisplayField, Event};
use crate::format;
use crate::metrics::{
    achieved_count, compute_benefit_progress, compute_consumption_stats, compute_elapsed,
    compute_health_regeneration, ConsumptionProfile, QuitEvent,
};

/// Period of the recurring tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Minimum spacing between health/benefit recomputations.
pub const SLOW_UPDATE_INTERVAL_MS: i64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerState {
    Stopped,
    Running,
    /// View hidden; no ticking until resumed.
    Suspended,
}

/// Token for one run of the recurring tick.
///
/// Every start or resume issues a fresh handle and invalidates the previous
/// one, so a tick from a cancelled timer is always ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DisplayKey {
    Field(DisplayField),
    Benefit(&'static str),
}

/// Recomputes metrics on a 1s / 5s cadence and emits only what changed.
#[derive(Debug, Clone)]
pub struct UpdateScheduler {
    quit: QuitEvent,
    profile: ConsumptionProfile,
    state: SchedulerState,
    generation: u64,
    active: Option<TickHandle>,
    last_slow_update: Option<DateTime<Utc>>,
    published: HashMap<DisplayKey, String>,
}

impl UpdateScheduler {
    pub fn new(quit: QuitEvent, profile: ConsumptionProfile) -> Self {
        Self {
            quit,
            profile,
            state: SchedulerState::Stopped,
            generation: 0,
            active: None,
            last_slow_update: None,
            published: HashMap::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn quit_event(&self) -> &QuitEvent {
        &self.quit
    }

    pub fn profile(&self) -> &ConsumptionProfile {
        &self.profile
    }

    pub fn last_slow_update(&self) -> Option<DateTime<Utc>> {
        self.last_slow_update
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start (or restart) ticking.
    ///
    /// Any previously issued handle is cancelled first. Returns the new handle
    /// and the events of one immediate full recomputation.
    pub fn start(&mut self, now: DateTime<Utc>) -> (TickHandle, Vec<Event>) {
        if self.active.is_some() {
            debug!(generation = self.generation, "restarting scheduler, cancelling prior tick");
        }
        let handle = self.issue_handle();
        self.state = SchedulerState::Running;
        self.published.clear();
        self.last_slow_update = None;

        let mut events = vec![Event::SchedulerStarted {
            quit_instant: self.quit.quit_instant,
            at: now,
        }];
        events.extend(self.refresh(now));
        (handle, events)
    }

    /// Cancel ticking. A no-op when already stopped.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state == SchedulerState::Stopped {
            return None;
        }
        debug!(generation = self.generation, "scheduler stopped");
        self.active = None;
        self.state = SchedulerState::Stopped;
        Some(Event::SchedulerStopped { at: now })
    }

    /// Host reports the view hidden: stop all work until [`Self::resume`].
    pub fn suspend(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state != SchedulerState::Running {
            return None;
        }
        debug!(generation = self.generation, "scheduler suspended");
        self.active = None;
        self.state = SchedulerState::Suspended;
        Some(Event::SchedulerSuspended { at: now })
    }

    /// Host reports the view visible again.
    ///
    /// Issues a new handle and recomputes everything immediately, so the
    /// display catches up on the whole hidden period before the next tick.
    pub fn resume(&mut self, now: DateTime<Utc>) -> Option<(TickHandle, Vec<Event>)> {
        if self.state != SchedulerState::Suspended {
            return None;
        }
        let handle = self.issue_handle();
        self.state = SchedulerState::Running;
        self.last_slow_update = None;
        debug!(generation = self.generation, "scheduler resumed");

        let mut events = vec![Event::SchedulerResumed { at: now }];
        events.extend(self.refresh(now));
        Some((handle, events))
    }

    /// Convenience over [`Self::suspend`] / [`Self::resume`].
    pub fn set_visible(
        &mut self,
        visible: bool,
        now: DateTime<Utc>,
    ) -> (Option<TickHandle>, Vec<Event>) {
        if visible {
            match self.resume(now) {
                Some((handle, events)) => (Some(handle), events),
                None => (self.active, Vec::new()),
            }
        } else {
            (None, self.suspend(now).into_iter().collect())
        }
    }

    /// One tick of the recurring timer.
    ///
    /// Returns nothing unless running and `handle` is the current handle.
    pub fn tick(&mut self, handle: &TickHandle, now: DateTime<Utc>) -> Vec<Event> {
        if self.state != SchedulerState::Running || self.active != Some(*handle) {
            return Vec::new();
        }
        self.refresh(now)
    }

    pub fn update_profile(&mut self, profile: ConsumptionProfile) {
        self.profile = profile;
        self.published.clear();
    }

    pub fn update_quit_event(&mut self, quit: QuitEvent) {
        self.quit = quit;
        self.published.clear();
        self.last_slow_update = None;
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn issue_handle(&mut self) -> TickHandle {
        self.generation += 1;
        let handle = TickHandle {
            generation: self.generation,
        };
        self.active = Some(handle);
        handle
    }

    fn refresh(&mut self, now: DateTime<Utc>) -> Vec<Event> {
        let quit_instant = self.quit.quit_instant;
        let mut events = Vec::new();

        let elapsed = compute_elapsed(quit_instant, now);
        events.push(Event::ElapsedTick {
            elapsed,
            display: format::clock(&elapsed),
            at: now,
        });

        let stats = compute_consumption_stats(quit_instant, now, &self.profile);
        for (field, value) in [
            (DisplayField::CigarettesAvoided, format::count(stats.cigarettes_avoided)),
            (DisplayField::PacksAvoided, format::count(stats.packs_avoided)),
            (DisplayField::MoneySaved, format::money(stats.money_saved)),
            (DisplayField::DaysQuit, format::count(stats.days_quit)),
        ] {
            self.publish_field(field, value, now, &mut events);
        }

        if self.slow_update_due(now) {
            self.last_slow_update = Some(now);
            self.refresh_health(now, &mut events);
        }
        events
    }

    fn slow_update_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_slow_update {
            None => true,
            Some(last) => {
                let since = (now - last).num_milliseconds();
                // a clock that stepped backwards also forces a refresh
                since >= SLOW_UPDATE_INTERVAL_MS || since < 0
            }
        }
    }

    fn refresh_health(&mut self, now: DateTime<Utc>, events: &mut Vec<Event>) {
        let quit_instant = self.quit.quit_instant;
        let health = compute_health_regeneration(quit_instant, now);
        let benefits = compute_benefit_progress(quit_instant, now);

        let next_label = health
            .next_milestone
            .map(|m| m.label.to_string())
            .unwrap_or_default();
        let time_until = health
            .time_until_next_milestone_ms
            .map(format::duration_ms)
            .unwrap_or_default();

        for (field, value) in [
            (DisplayField::HealthPercentage, format::percent(health.percentage)),
            (DisplayField::NextMilestone, next_label),
            (DisplayField::TimeUntilNextMilestone, time_until),
            (
                DisplayField::BenefitsAchieved,
                format!("{}/{}", achieved_count(&benefits), benefits.len()),
            ),
        ] {
            self.publish_field(field, value, now, events);
        }

        for benefit in &benefits {
            let value = benefit.progress_percent.to_string();
            if self.remember(DisplayKey::Benefit(benefit.name), value) {
                events.push(Event::BenefitChanged {
                    name: benefit.name,
                    progress_percent: benefit.progress_percent,
                    at: now,
                });
            }
        }
    }

    fn publish_field(
        &mut self,
        field: DisplayField,
        value: String,
        now: DateTime<Utc>,
        events: &mut Vec<Event>,
    ) {
        if self.remember(DisplayKey::Field(field), value.clone()) {
            events.push(Event::FieldChanged {
                field,
                value,
                at: now,
            });
        }
    }

    /// Record `value` for `key`; true if it differs from the last one.
    fn remember(&mut self, key: DisplayKey, value: String) -> bool {
        match self.published.get(&key) {
            Some(previous) if *previous == value => false,
            _ => {
                self.published.insert(key, value);
                true
            }
        }
    }
}
