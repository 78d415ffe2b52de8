use clap::Subcommand;
use smokefree_core::{PreferenceKey, Preferences};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a preference value
    Get {
        /// Preference key (quit_instant, nickname, cigarettes_per_day, cost_per_pack)
        key: String,
    },
    /// Set a preference value
    Set {
        /// Preference key
        key: String,
        /// New value
        value: String,
    },
    /// Unset a preference value
    Unset {
        /// Preference key
        key: String,
    },
    /// List stored preferences and the effective consumption profile
    List,
    /// Reset preferences to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let key: PreferenceKey = key.parse()?;
            let prefs = Preferences::load()?;
            match prefs.get(key) {
                Some(value) => println!("{value}"),
                None => println!("not set"),
            }
        }
        ConfigAction::Set { key, value } => {
            let key: PreferenceKey = key.parse()?;
            let mut prefs = Preferences::load()?;
            prefs.set(key, &value)?;
            prefs.save()?;
            println!("ok");
        }
        ConfigAction::Unset { key } => {
            let key: PreferenceKey = key.parse()?;
            let mut prefs = Preferences::load()?;
            prefs.clear(key);
            prefs.save()?;
            println!("ok");
        }
        ConfigAction::List => {
            let prefs = Preferences::load()?;
            let json = serde_json::json!({
                "stored": prefs,
                "effective_profile": prefs.consumption_profile(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        ConfigAction::Reset => {
            Preferences::default().save()?;
            println!("preferences reset to defaults");
        }
    }
    Ok(())
}
