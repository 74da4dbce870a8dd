//! Configuration module for Expense Vault
//!
//! - Base directory resolution
//! - Plaintext display settings (currency, theme)

pub mod paths;
pub mod settings;

pub use paths::VaultPaths;
pub use settings::{Settings, Theme};
