//! Path management for Expense Vault
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_VAULT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `expense-vault`
//!    (e.g. `~/.config/expense-vault` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::VaultError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_VAULT_DATA_DIR";

/// Manages all paths used by Expense Vault
#[derive(Debug, Clone)]
pub struct VaultPaths {
    base_dir: PathBuf,
}

impl VaultPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, VaultError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create VaultPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Plaintext settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Key-value store holding the encrypted data and setup flag
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("store.json")
    }

    /// Default destination for exports
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), VaultError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VaultError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Ensure the exports directory exists
    pub fn ensure_exports_dir(&self) -> Result<PathBuf, VaultError> {
        let dir = self.exports_dir();
        std::fs::create_dir_all(&dir)
            .map_err(|e| VaultError::Io(format!("Failed to create exports directory: {}", e)))?;
        Ok(dir)
    }
}

fn resolve_default_path() -> Result<PathBuf, VaultError> {
    ProjectDirs::from("", "", "expense-vault")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VaultError::Config("Could not determine a home directory".into()))
}
