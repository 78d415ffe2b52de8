use clap::Args;
use smokefree_core::milestones::{benefits_in, find_benefit};
use smokefree_core::{compute_benefit_progress, BenefitCategory, Preferences};

#[derive(Args)]
pub struct BenefitsArgs {
    /// Only show one category (heart, lung, body, sex, mind)
    #[arg(long)]
    category: Option<String>,
    /// Only show the benefit with this exact name, including its details
    #[arg(long)]
    name: Option<String>,
    /// Only show benefits already at 100%
    #[arg(long, conflicts_with = "pending")]
    achieved: bool,
    /// Only show benefits still in progress
    #[arg(long)]
    pending: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
    /// Evaluate at this instant instead of now (ISO-8601)
    #[arg(long)]
    at: Option<String>,
}

const BAR_WIDTH: usize = 20;

pub fn run(args: BenefitsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let in_category: Option<Vec<&'static str>> = match args.category.as_deref() {
        Some(raw) => {
            let category =
                BenefitCategory::parse(raw).ok_or_else(|| format!("unknown category: {raw}"))?;
            Some(benefits_in(category).iter().map(|b| b.name).collect())
        }
        None => None,
    };
    let named = match args.name.as_deref() {
        Some(raw) => Some(find_benefit(raw).ok_or_else(|| format!("unknown benefit: {raw}"))?),
        None => None,
    };

    let prefs = Preferences::load()?;
    let quit = super::require_quit_event(&prefs)?;
    let now = super::resolve_now(args.at.as_deref())?;

    let benefits: Vec<_> = compute_benefit_progress(quit.quit_instant, now)
        .into_iter()
        .filter(|b| in_category.as_ref().map_or(true, |names| names.contains(&b.name)))
        .filter(|b| named.map_or(true, |d| d.name == b.name))
        .filter(|b| !args.achieved || b.is_achieved())
        .filter(|b| !args.pending || !b.is_achieved())
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&benefits)?);
        return Ok(());
    }

    for b in &benefits {
        let filled = usize::from(b.progress_percent) * BAR_WIDTH / 100;
        println!(
            "[{}{}] {:>3}%  {:<5}  {} ({})",
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            b.progress_percent,
            b.category,
            b.name,
            b.timeframe
        );
    }
    if let Some(definition) = named {
        println!("\n{}", definition.details);
    }
    Ok(())
}
