//! Vault CLI commands
//!
//! Password setup, verification, export/import of the encrypted data and the
//! full wipe.

use chrono::Local;
use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;

use crate::config::paths::VaultPaths;
use crate::config::settings::Settings;
use crate::crypto::{Password, MIN_PASSWORD_LEN, PBKDF2_ITERATIONS};
use crate::error::{VaultError, VaultResult};
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Environment variable that supplies the password non-interactively
pub const PASSWORD_ENV: &str = "EXPENSE_VAULT_PASSWORD";

/// Vault management commands
#[derive(Subcommand)]
pub enum VaultCommands {
    /// Create your password (first run only)
    Setup,

    /// Show whether a password is set and where data lives
    Status,

    /// Check that your password unlocks the stored data
    Verify,

    /// Write the encrypted data to a .enc file
    Export {
        /// Destination file (default: exports/expense-tracker-YYYY-MM-DD.enc)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the stored data with an exported .enc file
    Import {
        /// Path to the .enc file
        file: PathBuf,
    },

    /// Permanently delete all data and the password setup
    Wipe {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a vault command
pub fn handle_vault_command<S: KeyValueStore>(
    paths: &VaultPaths,
    settings: &Settings,
    gateway: &mut PersistenceGateway<S>,
    cmd: VaultCommands,
) -> VaultResult<()> {
    match cmd {
        VaultCommands::Setup => setup(gateway),
        VaultCommands::Status => show_status(paths, settings, gateway),
        VaultCommands::Verify => verify(gateway),
        VaultCommands::Export { output } => export(paths, gateway, output),
        VaultCommands::Import { file } => import(gateway, file),
        VaultCommands::Wipe { force } => wipe(gateway, force),
    }
}

fn setup<S: KeyValueStore>(gateway: &mut PersistenceGateway<S>) -> VaultResult<()> {
    if gateway.is_setup()? {
        println!("A password is already set up.");
        println!("Use 'expense-vault verify' to check it.");
        return Ok(());
    }

    println!("Create Password");
    println!("===============");
    println!();
    println!("Your expense data is encrypted with AES-256-GCM under this password.");
    println!("Remember it: there is no way to recover your data if it is lost.");
    println!();

    let (password, confirmation) = prompt_new_password()?;
    gateway.setup(&password, &confirmation)?;

    println!("Password set. Your data is now encrypted.");
    Ok(())
}

fn show_status<S: KeyValueStore>(
    paths: &VaultPaths,
    settings: &Settings,
    gateway: &PersistenceGateway<S>,
) -> VaultResult<()> {
    println!("Expense Vault Status");
    println!("====================");
    println!();
    if gateway.is_setup()? {
        println!("Password:  SET");
    } else {
        println!("Password:  NOT SET (run 'expense-vault setup')");
    }
    println!("Data:      {}", paths.store_file().display());
    println!("Settings:  {}", paths.settings_file().display());
    println!();
    println!("Encryption:");
    println!("  Cipher:         AES-256-GCM");
    println!("  Key Derivation: PBKDF2-HMAC-SHA256, {} iterations", PBKDF2_ITERATIONS);
    println!();
    println!("Currency: {}", settings.currency);
    println!("Theme:    {}", settings.theme);
    Ok(())
}

fn verify<S: KeyValueStore>(gateway: &PersistenceGateway<S>) -> VaultResult<()> {
    let password = read_password("Enter password: ")?;
    if gateway.verify_password(&password)? {
        println!("Password is correct!");
        Ok(())
    } else {
        Err(VaultError::LoadFailed)
    }
}

fn export<S: KeyValueStore>(
    paths: &VaultPaths,
    gateway: &PersistenceGateway<S>,
    output: Option<PathBuf>,
) -> VaultResult<()> {
    let token = gateway.export_blob()?;

    let path = match output {
        Some(path) => path,
        None => paths
            .ensure_exports_dir()?
            .join(default_export_name(Local::now().date_naive())),
    };

    std::fs::write(&path, &token)
        .map_err(|e| VaultError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    println!("Encrypted data exported to {}", path.display());
    Ok(())
}

fn import<S: KeyValueStore>(gateway: &mut PersistenceGateway<S>, file: PathBuf) -> VaultResult<()> {
    let token = std::fs::read_to_string(&file)
        .map_err(|e| VaultError::Io(format!("Failed to read {}: {}", file.display(), e)))?;

    let password = read_password("Password for the imported file: ")?;
    gateway.import_blob(&token, &password)?;

    println!("Data imported successfully from {}", file.display());
    Ok(())
}

fn wipe<S: KeyValueStore>(gateway: &mut PersistenceGateway<S>, force: bool) -> VaultResult<()> {
    if !force {
        println!("This permanently deletes all expenses, budgets and your password setup.");
        print!("Type 'yes' to continue: ");
        std::io::stdout().flush()?;

        let mut confirm = String::new();
        std::io::stdin().read_line(&mut confirm)?;
        if confirm.trim().to_lowercase() != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    gateway.wipe()?;
    println!("All data has been permanently deleted.");
    Ok(())
}

/// Default export file name for a given day
pub fn default_export_name(date: chrono::NaiveDate) -> String {
    format!("expense-tracker-{}.enc", date.format("%Y-%m-%d"))
}

/// Read the session password from the environment or a hidden prompt
pub fn read_password(prompt: &str) -> VaultResult<Password> {
    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        return Ok(Password::new(value));
    }
    rpassword::prompt_password(prompt)
        .map(Password::new)
        .map_err(|e| VaultError::Io(format!("Failed to read password: {}", e)))
}

/// Prompt for a new password and its confirmation
///
/// Interactive prompts retry until the policy is met. When the password comes
/// from the environment it is used as its own confirmation.
fn prompt_new_password() -> VaultResult<(Password, Password)> {
    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        return Ok((Password::new(value.clone()), Password::new(value)));
    }

    loop {
        let first = read_password("Enter new password: ")?;
        if first.char_count() < MIN_PASSWORD_LEN {
            println!(
                "Password must be at least {} characters. Please try again.",
                MIN_PASSWORD_LEN
            );
            continue;
        }

        let second = read_password("Confirm password: ")?;
        if first.as_str() != second.as_str() {
            println!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok((first, second));
    }
}
