//! Expense CLI commands
//!
//! Implements CLI commands for recording and managing expenses.

use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;

use super::vault::read_password;
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{VaultError, VaultResult};
use crate::models::{Expense, ExpenseUpdate, NewExpense};
use crate::services::{parse_month, ExpenseService};
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount spent (e.g. "42.50")
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category (Housing, Transportation, Food, Utilities, Entertainment,
        /// Healthcare, Shopping, Subscriptions, Other, or your own)
        category: String,
        /// What it was for
        description: String,
        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID (or its first 8 characters)
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID (or its first 8 characters)
        id: String,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID (or its first 8 characters)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    gateway: &mut PersistenceGateway<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> VaultResult<()> {
    let password = read_password("Password: ")?;
    let mut service = ExpenseService::open(gateway, &password)?;
    let currency = settings.currency;

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = parse_date_or_today(date.as_deref())?;
            let expense =
                service.add_expense(NewExpense::one_off(amount, category, description, date))?;

            println!("Added expense: {}", expense.description);
            println!("  Amount:   {}", currency.format(expense.amount));
            println!("  Category: {}", expense.category);
            println!("  Date:     {}", expense.date);
            println!("  ID:       {}", expense.id.short());
        }

        ExpenseCommands::List {
            month,
            category,
            limit,
        } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            let mut expenses: Vec<&Expense> = service
                .list_expenses()
                .into_iter()
                .filter(|e| {
                    let day = e.date.naive_date();
                    month.map_or(true, |(y, m)| day.year() == y && day.month() == m)
                })
                .filter(|e| {
                    category
                        .as_deref()
                        .map_or(true, |c| e.category.eq_ignore_ascii_case(c.trim()))
                })
                .collect();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            println!("{}", format_expense_list(&expenses, currency).trim_end());
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            println!("{}", format_expense_details(expense, currency).trim_end());
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            description,
            date,
        } => {
            let update = ExpenseUpdate {
                amount,
                category,
                description,
                date: date.as_deref().map(parse_date).transpose()?,
                recurring_day: None,
            };
            if update.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let id = service.find(&id)?.id.clone();
            let expense = service.update_expense(&id, update)?;
            println!("Updated expense: {}", expense);
        }

        ExpenseCommands::Delete { id } => {
            let id = service.find(&id)?.id.clone();
            let removed = service.delete_expense(&id)?;
            println!("Deleted expense: {}", removed);
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(s: &str) -> VaultResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        VaultError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
    })
}

/// Parse an optional date, defaulting to today
pub fn parse_date_or_today(s: Option<&str>) -> VaultResult<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}
