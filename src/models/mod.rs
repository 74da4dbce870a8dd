//! Core data models for Expense Vault
//!
//! This module contains the plaintext data that is serialized and encrypted:
//! expenses, budgets and the [`AppData`] container, plus display currency.

pub mod app_data;
pub mod category;
pub mod currency;
pub mod date;
pub mod expense;
pub mod ids;

pub use app_data::{AppData, Budgets};
pub use category::{is_default_category, normalize_category, DEFAULT_CATEGORIES};
pub use currency::Currency;
pub use date::ExpenseDate;
pub use expense::{Expense, ExpenseUpdate, ExpenseValidationError, NewExpense};
pub use ids::ExpenseId;
