//! Tokio driver for [`UpdateScheduler`].
//!
//! The spawned task is the only owner of the scheduler. Control arrives
//! over a command channel and events leave over another, so scheduler state
//! is never shared and needs no lock.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use super::engine::{TickHandle, UpdateScheduler, TICK_INTERVAL};
use super::Clock;
use crate::events::Event;
use crate::metrics::{ConsumptionProfile, QuitEvent};

#[derive(Debug, Clone)]
pub enum TrackerCommand {
    SetVisible(bool),
    UpdateProfile(ConsumptionProfile),
    UpdateQuitEvent(QuitEvent),
    Restart,
    Stop,
}

/// Control side of a running tracker task.
///
/// Dropping the handle closes the command channel, which stops the task.
#[derive(Debug)]
pub struct TrackerHandle {
    commands: mpsc::UnboundedSender<TrackerCommand>,
    task: Option<JoinHandle<UpdateScheduler>>,
}

impl TrackerHandle {
    pub fn set_visible(&self, visible: bool) {
        self.send(TrackerCommand::SetVisible(visible));
    }

    pub fn update_profile(&self, profile: ConsumptionProfile) {
        self.send(TrackerCommand::UpdateProfile(profile));
    }

    pub fn update_quit_event(&self, quit: QuitEvent) {
        self.send(TrackerCommand::UpdateQuitEvent(quit));
    }

    pub fn restart(&self) {
        self.send(TrackerCommand::Restart);
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Stop ticking and wait for the task to exit.
    ///
    /// Once this returns no further event is sent. Returns the scheduler on
    /// the first call and `None` on any later one.
    pub async fn stop(&mut self) -> Option<UpdateScheduler> {
        let task = self.task.take()?;
        self.send(TrackerCommand::Stop);
        match task.await {
            Ok(scheduler) => Some(scheduler),
            Err(e) => {
                warn!(error = %e, "tracker task did not exit cleanly");
                None
            }
        }
    }

    fn send(&self, command: TrackerCommand) {
        if self.commands.send(command).is_err() {
            debug!("tracker task already finished, command dropped");
        }
    }
}

/// Spawn a task that ticks `scheduler` every [`TICK_INTERVAL`] and forwards
/// its events to `events`.
///
/// Must be called from within a tokio runtime. The task ends when stopped,
/// when the handle is dropped, or when `events` is closed.
pub fn spawn_tracker<C>(
    scheduler: UpdateScheduler,
    clock: C,
    events: mpsc::UnboundedSender<Event>,
) -> TrackerHandle
where
    C: Clock + 'static,
{
    let (commands, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(scheduler, clock, rx, events));
    TrackerHandle {
        commands,
        task: Some(task),
    }
}

async fn run<C: Clock>(
    mut scheduler: UpdateScheduler,
    clock: C,
    mut commands: mpsc::UnboundedReceiver<TrackerCommand>,
    events: mpsc::UnboundedSender<Event>,
) -> UpdateScheduler {
    let mut interval = time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let (handle, initial) = scheduler.start(clock.now());
    let mut active: Option<TickHandle> = Some(handle);
    // the start already refreshed; first tick one period from now
    interval.reset();
    if !publish(&events, initial) {
        scheduler.stop(clock.now());
        return scheduler;
    }

    loop {
        let delivered = tokio::select! {
            command = commands.recv() => {
                let now = clock.now();
                match command {
                    None | Some(TrackerCommand::Stop) => {
                        if let Some(event) = scheduler.stop(now) {
                            let _ = events.send(event);
                        }
                        break;
                    }
                    Some(TrackerCommand::SetVisible(visible)) => {
                        let (handle, out) = scheduler.set_visible(visible, now);
                        if visible && active != handle {
                            interval.reset();
                        }
                        active = handle;
                        publish(&events, out)
                    }
                    Some(TrackerCommand::Restart) => {
                        let (handle, out) = scheduler.start(now);
                        active = Some(handle);
                        interval.reset();
                        publish(&events, out)
                    }
                    Some(TrackerCommand::UpdateProfile(profile)) => {
                        scheduler.update_profile(profile);
                        true
                    }
                    Some(TrackerCommand::UpdateQuitEvent(quit)) => {
                        scheduler.update_quit_event(quit);
                        true
                    }
                }
            }
            _ = interval.tick(), if active.is_some() => {
                match active {
                    Some(handle) => publish(&events, scheduler.tick(&handle, clock.now())),
                    None => true,
                }
            }
        };

        if !delivered {
            debug!("event receiver closed, stopping tracker");
            scheduler.stop(clock.now());
            break;
        }
    }
    scheduler
}

/// Forward `batch`; false once the receiver is gone.
fn publish(events: &mpsc::UnboundedSender<Event>, batch: Vec<Event>) -> bool {
    batch.into_iter().all(|event| events.send(event).is_ok())
}
