pub mod benefits;
pub mod config;
pub mod quit;
pub mod status;
pub mod watch;

use chrono::{DateTime, Utc};
use smokefree_core::{Preferences, QuitEvent};

/// Stored quit event, or an error telling the user how to set one.
pub fn require_quit_event(prefs: &Preferences) -> Result<QuitEvent, Box<dyn std::error::Error>> {
    prefs
        .quit_event()
        .ok_or_else(|| "no quit instant set; run `smokefree quit set <ISO-8601|now>`".into())
}

/// `--at` override for "now", parsed like a stored quit instant.
pub fn resolve_now(at: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match at {
        None => Ok(Utc::now()),
        Some(raw) => QuitEvent::parse(raw)
            .map(|q| q.quit_instant)
            .ok_or_else(|| format!("cannot parse --at value '{raw}'").into()),
    }
}
