//! # SmokeFree Core Library
//!
//! This library provides the computation engine behind the SmokeFree quit
//! tracker. Everything is local and in-process: the caller supplies a quit
//! instant and consumption preferences, the engine returns plain value
//! records describing progress since that instant.
//!
//! ## Architecture
//!
//! - **Milestones**: Static catalogs of aggregate health milestones and
//!   individual recovery benefits
//! - **Metrics**: Pure functions computing elapsed time, consumption
//!   statistics, health regeneration and per-benefit progress
//! - **Scheduler**: A wall-clock-driven state machine that recomputes metrics
//!   at a 1s / 5s cadence and emits only changed display values, plus a tokio
//!   driver that ticks it
//! - **Storage**: TOML-based persisted preferences
//!
//! ## Key Components
//!
//! - [`compute_elapsed`], [`compute_consumption_stats`],
//!   [`compute_health_regeneration`], [`compute_benefit_progress`]
//! - [`UpdateScheduler`]: Diffing update scheduler
//! - [`Preferences`]: Persisted user preferences

pub mod error;
pub mod events;
pub mod format;
pub mod metrics;
pub mod milestones;
pub mod scheduler;
pub mod storage;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::{DisplayField, Event};
pub use metrics::{
    achieved_count, compute_benefit_progress, compute_consumption_stats, compute_elapsed,
    compute_health_regeneration, BenefitProgress, ConsumptionProfile, ConsumptionStats,
    ElapsedMetrics, HealthRegeneration, QuitEvent, Snapshot,
};
pub use milestones::{
    BenefitCategory, BenefitDefinition, MilestoneDefinition, BENEFITS, HEALTH_MILESTONES,
};
pub use scheduler::{
    spawn_tracker, Clock, SystemClock, TickHandle, TrackerHandle, UpdateScheduler,
};
pub use storage::{PreferenceKey, Preferences};
