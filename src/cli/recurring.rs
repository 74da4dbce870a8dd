//! Recurring expense CLI commands

use clap::Subcommand;

use super::expense::parse_date_or_today;
use super::vault::read_password;
use crate::config::settings::Settings;
use crate::display::{format_recurring_list, ordinal_day};
use crate::error::{VaultError, VaultResult};
use crate::models::NewExpense;
use crate::services::ExpenseService;
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Set up a monthly recurring expense (subscriptions, bills)
    Add {
        /// Monthly amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category
        category: String,
        /// What it is for
        description: String,
        /// Day of the month it is charged (1-28)
        #[arg(short = 'D', long, default_value = "1")]
        day: u8,
        /// Start date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List recurring expenses and their monthly total
    List,
    /// Delete a recurring expense
    Delete {
        /// Expense ID (or its first 8 characters)
        id: String,
    },
}

/// Handle a recurring expense command
pub fn handle_recurring_command<S: KeyValueStore>(
    gateway: &mut PersistenceGateway<S>,
    settings: &Settings,
    cmd: RecurringCommands,
) -> VaultResult<()> {
    let password = read_password("Password: ")?;
    let mut service = ExpenseService::open(gateway, &password)?;
    let currency = settings.currency;

    match cmd {
        RecurringCommands::Add {
            amount,
            category,
            description,
            day,
            date,
        } => {
            let date = parse_date_or_today(date.as_deref())?;
            let expense = service.add_expense(NewExpense::recurring(
                amount,
                category,
                description,
                date,
                day,
            ))?;

            println!("Added recurring expense: {}", expense.description);
            println!(
                "  {} every {} of the month ({})",
                currency.format(expense.amount),
                ordinal_day(day),
                expense.category
            );
            println!("  ID: {}", expense.id.short());
        }

        RecurringCommands::List => {
            let recurring = service.recurring_expenses();
            let output = format_recurring_list(service.data(), &recurring, currency);
            println!("{}", output.trim_end());
        }

        RecurringCommands::Delete { id } => {
            let expense = service.find(&id)?;
            if !expense.is_recurring {
                return Err(VaultError::Validation(format!(
                    "Expense {} is not recurring; use 'expense delete'",
                    expense.id.short()
                )));
            }
            let id = expense.id.clone();
            let removed = service.delete_expense(&id)?;
            println!("Deleted recurring expense: {}", removed.description);
        }
    }

    Ok(())
}
