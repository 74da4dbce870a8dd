//! Custom error types for Expense Vault
//!
//! This module defines the crate-wide error type using thiserror. Errors from
//! the cryptographic layer live in [`crate::crypto::CryptoError`] and are
//! collapsed into the coarse gateway variants below before they reach a caller.

use thiserror::Error;

/// The main error type for Expense Vault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored data could not be decrypted or decoded
    #[error("Failed to decrypt data. Incorrect password or corrupted data.")]
    LoadFailed,

    /// Data could not be encrypted for storage
    #[error("Failed to save data. Please try again.")]
    SaveFailed,

    /// Nothing has been stored yet
    #[error("No data to export")]
    NothingToExport,

    /// Imported data did not decrypt with the given password
    #[error("Failed to import data. Invalid file or password.")]
    ImportFailed,

    /// New password does not meet the minimum length
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Setup attempted while a password already exists
    #[error("A password has already been set up")]
    AlreadySetup,

    /// Data operations attempted before a password was established
    #[error("No password set up yet. Run 'expense-vault setup' first.")]
    NotSetup,
}

impl VaultError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Expense Vault operations
pub type VaultResult<T> = Result<T, VaultError>;
