use clap::Args;
use smokefree_core::{spawn_tracker, Event, Preferences, SystemClock, UpdateScheduler};
use tokio::sync::mpsc;
use tracing::info;

#[derive(Args)]
pub struct WatchArgs {
    /// Stop after this many clock ticks
    #[arg(long)]
    ticks: Option<u64>,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = Preferences::load()?;
    let quit = super::require_quit_event(&prefs)?;
    let scheduler = UpdateScheduler::new(quit, prefs.consumption_profile());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tracker = spawn_tracker(scheduler, SystemClock, tx);
        info!(quit_instant = %quit.to_iso(), "watching");

        let mut seen_ticks = 0u64;
        while let Some(event) = rx.recv().await {
            println!("{}", serde_json::to_string(&event)?);
            if matches!(event, Event::ElapsedTick { .. }) {
                seen_ticks += 1;
                if args.ticks.is_some_and(|limit| seen_ticks >= limit) {
                    break;
                }
            }
        }

        if tracker.stop().await.is_some() {
            while let Ok(event) = rx.try_recv() {
                println!("{}", serde_json::to_string(&event)?);
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
