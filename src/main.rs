use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_vault::cli::{
    handle_budget_command, handle_config_command, handle_expense_command,
    handle_recurring_command, handle_summary_command, handle_vault_command, BudgetCommands,
    ConfigCommands, ExpenseCommands, RecurringCommands, VaultCommands,
};
use expense_vault::config::{paths::VaultPaths, settings::Settings};
use expense_vault::storage::open_file_gateway;

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSE_VAULT_LOG";

#[derive(Parser)]
#[command(
    name = "expense-vault",
    version,
    about = "Personal expense tracker with password-encrypted storage",
    long_about = "Expense Vault records your expenses, recurring bills and monthly \
                  budgets. Everything is encrypted at rest with AES-256-GCM under a key \
                  derived from your password. Set EXPENSE_VAULT_PASSWORD to skip the \
                  password prompt."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Vault(VaultCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Recurring expense commands
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show the spending summary for a month
    Summary {
        /// Month to summarize (YYYY-MM, default current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = VaultPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let mut gateway = open_file_gateway(&paths)?;

    match cli.command {
        Some(Commands::Vault(cmd)) => {
            handle_vault_command(&paths, &settings, &mut gateway, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut gateway, &settings, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&mut gateway, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut gateway, &settings, cmd)?;
        }
        Some(Commands::Summary { month }) => {
            handle_summary_command(&gateway, &settings, month.as_deref())?;
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        None => {
            println!("Expense Vault - encrypted personal expense tracking");
            println!();
            if gateway.is_setup()? {
                println!("Run 'expense-vault summary' to see this month's spending.");
            } else {
                println!("Run 'expense-vault setup' to create your password.");
            }
            println!("Run 'expense-vault --help' for usage information.");
        }
    }

    Ok(())
}
