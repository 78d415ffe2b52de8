use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "smokefree", version, about = "SmokeFree quit tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Progress summary since quitting
    Status(commands::status::StatusArgs),
    /// Individual health benefits and their progress
    Benefits(commands::benefits::BenefitsArgs),
    /// Quit instant management
    Quit {
        #[command(subcommand)]
        action: commands::quit::QuitAction,
    },
    /// Preference management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Live-updating progress, one JSON event per line
    Watch(commands::watch::WatchArgs),
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SMOKEFREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check_catalog() {
    match smokefree_core::milestones::validate_catalog() {
        Ok(()) => debug!(
            milestones = smokefree_core::HEALTH_MILESTONES.len(),
            benefits = smokefree_core::BENEFITS.len(),
            "milestone catalog validated"
        ),
        Err(e) => warn!(error = %e, "milestone catalog is inconsistent"),
    }
}

fn main() {
    init_tracing();
    check_catalog();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status(args) => commands::status::run(args),
        Commands::Benefits(args) => commands::benefits::run(args),
        Commands::Quit { action } => commands::quit::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Watch(args) => commands::watch::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
