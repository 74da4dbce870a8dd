//! Service layer for Expense Vault
//!
//! Business logic on top of the decrypted data: recording expenses, budgets
//! and the monthly summary.

pub mod expense;
pub mod summary;

pub use expense::ExpenseService;
pub use summary::{parse_month, recurring_total, CategorySpending, MonthlySummary};
