//! Expense Vault - personal expense tracking, encrypted at rest
//!
//! All expenses and budgets are serialized to JSON and stored as a single
//! AES-256-GCM encrypted token. The key is derived from the user's password
//! with PBKDF2-HMAC-SHA256 and a fresh salt on every save; the password itself
//! is never stored.
//!
//! # Architecture
//!
//! - `crypto`: key derivation, authenticated encryption, token codec
//! - `storage`: key-value stores and the persistence gateway
//! - `models`: the plaintext data (expenses, budgets)
//! - `services`: expense/budget operations and monthly summaries
//! - `config`: paths and display settings
//! - `display`, `cli`: terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_vault::crypto::Password;
//! use expense_vault::models::AppData;
//! use expense_vault::storage::{MemoryStore, PersistenceGateway};
//!
//! let mut gateway = PersistenceGateway::new(MemoryStore::new());
//! let password = Password::new("correcthorse123");
//! gateway.save(&AppData::empty(), &password)?;
//! let data = gateway.load(&password)?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{VaultError, VaultResult};
