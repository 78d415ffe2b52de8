use chrono::Utc;
use clap::Subcommand;
use smokefree_core::{PreferenceKey, Preferences, QuitEvent};

#[derive(Subcommand)]
pub enum QuitAction {
    /// Set the quit instant (ISO-8601, or "now")
    Set {
        /// Timestamp such as 2024-06-01T08:00:00Z
        when: String,
    },
    /// Print the stored quit instant
    Show,
    /// Forget the quit instant
    Clear,
}

pub fn run(action: QuitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut prefs = Preferences::load()?;

    match action {
        QuitAction::Set { when } => {
            let value = if when.trim().eq_ignore_ascii_case("now") {
                QuitEvent::new(Utc::now()).to_iso()
            } else {
                when
            };
            prefs.set(PreferenceKey::QuitInstant, &value)?;
            prefs.save()?;
            if let Some(stored) = prefs.get(PreferenceKey::QuitInstant) {
                println!("{stored}");
            }
        }
        QuitAction::Show => match prefs.quit_event() {
            Some(quit) => println!("{}", quit.to_iso()),
            None => println!("not set"),
        },
        QuitAction::Clear => {
            prefs.clear(PreferenceKey::QuitInstant);
            prefs.save()?;
            println!("quit instant cleared");
        }
    }
    Ok(())
}
