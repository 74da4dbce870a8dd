//! Settings CLI commands
//!
//! Display preferences. These are stored unencrypted and need no password.

use clap::Subcommand;

use crate::config::paths::VaultPaths;
use crate::config::settings::{Settings, Theme};
use crate::error::{VaultError, VaultResult};
use crate::models::Currency;

/// Settings subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings and paths
    Show,
    /// Set the display currency (USD, INR)
    Currency { code: String },
    /// Set the color theme (light, dark, system)
    Theme { name: String },
}

/// Handle a settings command
pub fn handle_config_command(
    paths: &VaultPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> VaultResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Expense Vault Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data store:     {}", paths.store_file().display());
            println!("Exports:        {}", paths.exports_dir().display());
            println!();
            println!("Currency: {} ({})", settings.currency, settings.currency.name());
            println!("Theme:    {}", settings.theme);
        }

        ConfigCommands::Currency { code } => {
            let currency = Currency::parse(&code).ok_or_else(|| {
                let valid: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
                VaultError::Validation(format!(
                    "Unknown currency '{}'. Valid: {}",
                    code,
                    valid.join(", ")
                ))
            })?;
            settings.currency = currency;
            settings.save(paths)?;
            println!("Currency set to {} ({})", currency, currency.symbol());
        }

        ConfigCommands::Theme { name } => {
            let theme = Theme::parse(&name).ok_or_else(|| {
                VaultError::Validation(format!(
                    "Unknown theme '{}'. Valid: light, dark, system",
                    name
                ))
            })?;
            settings.theme = theme;
            settings.save(paths)?;
            println!("Theme set to {}", theme);
        }
    }

    Ok(())
}
