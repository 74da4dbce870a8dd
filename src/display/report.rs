//! Monthly summary display

use chrono::NaiveDate;

use crate::models::Currency;
use crate::services::MonthlySummary;

/// Format the monthly dashboard summary
pub fn format_monthly_summary(summary: &MonthlySummary, currency: Currency) -> String {
    let title = NaiveDate::from_ymd_opt(summary.year, summary.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", summary.year, summary.month));

    let mut output = String::new();
    output.push_str(&format!("Summary for {}\n", title));
    output.push_str(&format!("{}\n", "=".repeat(12 + title.chars().count())));
    output.push_str(&format!("  Total Spent:   {}\n", currency.format(summary.total_spent)));
    output.push_str(&format!("  Total Budget:  {}\n", currency.format(summary.total_budget)));
    output.push_str(&format!(
        "  Remaining:     {} ({})\n",
        currency.format(summary.remaining()),
        if summary.is_over_budget() {
            "Over budget"
        } else {
            "Under budget"
        }
    ));
    if let Some(pct) = summary.percent_used() {
        output.push_str(&format!("  Budget Used:   {:.1}%\n", pct));
    }
    output.push_str(&format!("  Expenses:      {}\n", summary.expense_count));

    if summary.categories.is_empty() {
        output.push_str("\nNo expenses this month.\n");
        return output;
    }

    let cat_width = summary
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    output.push('\n');
    output.push_str(&format!(
        "{:<cat_width$}  {:>12}  {:>12}  {}\n",
        "Category",
        "Spent",
        "Budget",
        "Status",
        cat_width = cat_width,
    ));
    output.push_str(&format!(
        "{:-<cat_width$}  {:->12}  {:->12}  {:-<6}\n",
        "",
        "",
        "",
        "",
        cat_width = cat_width,
    ));

    for row in &summary.categories {
        let budget = if row.budget > 0.0 {
            currency.format(row.budget)
        } else {
            "-".to_string()
        };
        let status = if row.is_over_budget() { "OVER" } else { "" };
        output.push_str(&format!(
            "{:<cat_width$}  {:>12}  {:>12}  {}\n",
            row.category,
            currency.format(row.amount),
            budget,
            status,
            cat_width = cat_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppData, Expense, NewExpense};

    #[test]
    fn test_format_monthly_summary() {
        let mut data = AppData::empty();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        data.expenses
            .push(Expense::new(NewExpense::one_off(80.0, "Food", "Groceries", date)));
        data.budgets.insert("Food".into(), 50.0);

        let summary = MonthlySummary::for_month(&data, 2024, 3).unwrap();
        let output = format_monthly_summary(&summary, Currency::Usd);

        assert!(output.contains("Summary for March 2024"));
        assert!(output.contains("Total Spent:   $80.00"));
        assert!(output.contains("Over budget"));
        assert!(output.contains("OVER"));
        assert!(output.contains("Budget Used:   160.0%"));
    }

    #[test]
    fn test_format_empty_month() {
        let summary = MonthlySummary::for_month(&AppData::empty(), 2024, 1).unwrap();
        let output = format_monthly_summary(&summary, Currency::Inr);
        assert!(output.contains("No expenses this month."));
        assert!(output.contains("Under budget"));
    }
}
