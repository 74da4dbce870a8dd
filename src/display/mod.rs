//! Display formatting for terminal output
//!
//! Formats expenses, budgets and summaries as plain-text tables.

pub mod expense;
pub mod report;

pub use expense::{
    format_budget_list, format_expense_details, format_expense_list, format_recurring_list,
    ordinal_day,
};
pub use report::format_monthly_summary;
