//! Summary CLI command

use chrono::Local;

use super::vault::read_password;
use crate::config::settings::Settings;
use crate::display::format_monthly_summary;
use crate::error::VaultResult;
use crate::services::{parse_month, MonthlySummary};
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Print the spending summary for a month (default: the current one)
pub fn handle_summary_command<S: KeyValueStore>(
    gateway: &PersistenceGateway<S>,
    settings: &Settings,
    month: Option<&str>,
) -> VaultResult<()> {
    let password = read_password("Password: ")?;
    let data = gateway.unlock(&password)?;

    let summary = match month {
        Some(month) => {
            let (year, month) = parse_month(month)?;
            MonthlySummary::for_month(&data, year, month)?
        }
        None => MonthlySummary::containing(&data, Local::now().date_naive()),
    };

    println!("{}", format_monthly_summary(&summary, settings.currency).trim_end());
    Ok(())
}
