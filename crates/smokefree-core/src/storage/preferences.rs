//! TOML-backed user preferences.
//!
//! Values are stored as strings, exactly as the user supplied them after
//! normalization. Reading is lenient: anything missing or unparseable counts
//! as unset and the engine falls back to defaults. Writing through
//! [`Preferences::set`] validates first.
//!
//! Stored at `<data_dir>/preferences.toml`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::metrics::{ConsumptionProfile, QuitEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKey {
    QuitInstant,
    Nickname,
    CigarettesPerDay,
    CostPerPack,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 4] = [
        PreferenceKey::QuitInstant,
        PreferenceKey::Nickname,
        PreferenceKey::CigarettesPerDay,
        PreferenceKey::CostPerPack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::QuitInstant => "quit_instant",
            PreferenceKey::Nickname => "nickname",
            PreferenceKey::CigarettesPerDay => "cigarettes_per_day",
            PreferenceKey::CostPerPack => "cost_per_pack",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

/// Persisted preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// ISO-8601 quit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quit_instant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Integer string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cigarettes_per_day: Option<String>,
    /// Decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_pack: Option<String>,
}

impl Preferences {
    /// Default preferences file location.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("preferences.toml"))
    }

    /// Load from the default location. A missing file yields empty
    /// preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from the default location, falling back to empty preferences.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load preferences, using defaults");
            Self::default()
        })
    }

    /// # Errors
    ///
    /// Returns an error if `path` exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file yet");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        toml::from_str(&content).map_err(|e| {
            ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// # Errors
    ///
    /// Returns an error if the preferences cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    pub fn get(&self, key: PreferenceKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    /// Validate, normalize and store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the value does not parse for
    /// that key.
    pub fn set(&mut self, key: PreferenceKey, value: &str) -> Result<(), ConfigError> {
        let normalized = normalize(key, value)?;
        *self.slot_mut(key) = Some(normalized);
        Ok(())
    }

    pub fn clear(&mut self, key: PreferenceKey) {
        *self.slot_mut(key) = None;
    }

    /// The stored quit instant, if set and parseable.
    pub fn quit_event(&self) -> Option<QuitEvent> {
        let raw = self.quit_instant.as_deref()?;
        let parsed = QuitEvent::parse(raw);
        if parsed.is_none() {
            warn!(value = raw, "stored quit instant is unparseable, treating as unset");
        }
        parsed
    }

    /// Consumption profile with defaults for anything unset or invalid.
    pub fn consumption_profile(&self) -> ConsumptionProfile {
        ConsumptionProfile::from_raw(
            self.cigarettes_per_day.as_deref(),
            self.cost_per_pack.as_deref(),
        )
    }

    /// Trimmed nickname, if non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.nickname
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    fn slot(&self, key: PreferenceKey) -> &Option<String> {
        match key {
            PreferenceKey::QuitInstant => &self.quit_instant,
            PreferenceKey::Nickname => &self.nickname,
            PreferenceKey::CigarettesPerDay => &self.cigarettes_per_day,
            PreferenceKey::CostPerPack => &self.cost_per_pack,
        }
    }

    fn slot_mut(&mut self, key: PreferenceKey) -> &mut Option<String> {
        match key {
            PreferenceKey::QuitInstant => &mut self.quit_instant,
            PreferenceKey::Nickname => &mut self.nickname,
            PreferenceKey::CigarettesPerDay => &mut self.cigarettes_per_day,
            PreferenceKey::CostPerPack => &mut self.cost_per_pack,
        }
    }
}

fn normalize(key: PreferenceKey, value: &str) -> Result<String, ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    };
    let value = value.trim();

    match key {
        PreferenceKey::QuitInstant => QuitEvent::parse(value)
            .map(|q| q.to_iso())
            .ok_or_else(|| invalid("expected an ISO-8601 timestamp")),
        PreferenceKey::Nickname => Ok(value.to_string()),
        PreferenceKey::CigarettesPerDay => match value.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n.to_string()),
            _ => Err(invalid("expected a positive whole number")),
        },
        PreferenceKey::CostPerPack => match value.parse::<f64>() {
            Ok(c) if c.is_finite() && c >= 0.0 => Ok(value.to_string()),
            _ => Err(invalid("expected a non-negative decimal")),
        },
    }
}
