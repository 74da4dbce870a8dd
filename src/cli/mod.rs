//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod recurring;
pub mod report;
pub mod settings;
pub mod vault;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::handle_summary_command;
pub use settings::{handle_config_command, ConfigCommands};
pub use vault::{handle_vault_command, VaultCommands, PASSWORD_ENV};
