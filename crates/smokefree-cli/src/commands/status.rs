use clap::Args;
use smokefree_core::{format, Preferences, Snapshot};

#[derive(Args)]
pub struct StatusArgs {
    /// Print the full snapshot as JSON
    #[arg(long)]
    json: bool,
    /// Evaluate at this instant instead of now (ISO-8601)
    #[arg(long)]
    at: Option<String>,
}

pub fn run(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = Preferences::load()?;
    let quit = super::require_quit_event(&prefs)?;
    let now = super::resolve_now(args.at.as_deref())?;
    let snapshot = Snapshot::compute(&quit, now, &prefs.consumption_profile());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if let Some(name) = prefs.display_name() {
        println!("Hi {name}!");
    }
    println!("Smoke-free for:      {}", format::clock(&snapshot.elapsed));
    println!("Cigarettes avoided:  {}", format::count(snapshot.stats.cigarettes_avoided));
    println!("Packs avoided:       {}", format::count(snapshot.stats.packs_avoided));
    println!("Money saved:         {}", format::money(snapshot.stats.money_saved));

    let health = &snapshot.health;
    match (health.next_milestone, health.time_until_next_milestone_ms) {
        (Some(next), Some(ms)) => println!(
            "Health regeneration: {} (next: {} in {})",
            format::percent(health.percentage),
            next.label,
            format::duration_ms(ms)
        ),
        _ => println!(
            "Health regeneration: {} (all milestones reached)",
            format::percent(health.percentage)
        ),
    }
    println!(
        "Benefits achieved:   {}/{}",
        snapshot.achieved_benefits(),
        snapshot.benefits.len()
    );
    Ok(())
}
