//! User settings for Expense Vault
//!
//! Display preferences only. Settings are stored in plain JSON next to the
//! encrypted store and never hold the password or anything derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::VaultPaths;
use crate::error::VaultError;
use crate::models::Currency;
use crate::storage::{read_json, write_json_atomic};

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
            Self::System => write!(f, "system"),
        }
    }
}

/// User settings for Expense Vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used when displaying amounts
    #[serde(default)]
    pub currency: Currency,

    /// Color theme
    #[serde(default)]
    pub theme: Theme,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] to persist.
    pub fn load_or_create(paths: &VaultPaths) -> Result<Self, VaultError> {
        read_json(paths.settings_file())
            .map_err(|e| VaultError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VaultPaths) -> Result<(), VaultError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
