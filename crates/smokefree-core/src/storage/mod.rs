mod preferences;

pub use preferences::{PreferenceKey, Preferences};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns the SmokeFree data directory, creating it if needed.
///
/// `SMOKEFREE_DATA_DIR` overrides the location outright. Otherwise it is
/// `~/.config/smokefree`, or `~/.config/smokefree-dev` when
/// `SMOKEFREE_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("SMOKEFREE_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("SMOKEFREE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("smokefree-dev")
            } else {
                base_dir.join("smokefree")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
