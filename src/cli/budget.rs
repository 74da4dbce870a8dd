//! Budget CLI commands
//!
//! Monthly budgets per category.

use clap::Subcommand;

use super::vault::read_password;
use crate::config::settings::Settings;
use crate::display::format_budget_list;
use crate::error::VaultResult;
use crate::services::ExpenseService;
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category
    Set {
        /// Category name
        category: String,
        /// Monthly amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// List budgets
    List,
    /// Remove the budget for a category
    Remove {
        /// Category name
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    gateway: &mut PersistenceGateway<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> VaultResult<()> {
    let password = read_password("Password: ")?;
    let mut service = ExpenseService::open(gateway, &password)?;
    let currency = settings.currency;

    match cmd {
        BudgetCommands::Set { category, amount } => {
            service.set_budget(&category, amount)?;
            println!(
                "Budget for {} set to {}",
                category.trim(),
                currency.format(amount)
            );
        }

        BudgetCommands::List => {
            println!("{}", format_budget_list(service.data(), currency).trim_end());
        }

        BudgetCommands::Remove { category } => {
            let removed = service.remove_budget(&category)?;
            println!(
                "Removed budget for {} (was {})",
                category.trim(),
                currency.format(removed)
            );
        }
    }

    Ok(())
}
