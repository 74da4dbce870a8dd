//! Expense display formatting
//!
//! Formats expenses, recurring expenses and budgets as plain-text tables.

use crate::models::{AppData, Currency, Expense};
use crate::services::recurring_total;

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count())
}

/// Ordinal label for a day of month: 1st, 2nd, 3rd, 4th, 11th, 21st ...
pub fn ordinal_day(day: u8) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[&Expense], currency: Currency) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let amounts: Vec<String> = expenses.iter().map(|e| currency.format(e.amount)).collect();
    let cat_width = column_width(expenses.iter().map(|e| e.category.as_str()), "Category");
    let amount_width = column_width(amounts.iter().map(|a| a.as_str()), "Amount");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<10}  {:<cat_width$}  {:>amount_width$}  {}\n",
        "ID",
        "Date",
        "Category",
        "Amount",
        "Description",
        cat_width = cat_width,
        amount_width = amount_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<10}  {:-<cat_width$}  {:->amount_width$}  {:-<11}\n",
        "",
        "",
        "",
        "",
        "",
        cat_width = cat_width,
        amount_width = amount_width,
    ));

    for (expense, amount) in expenses.iter().zip(&amounts) {
        let recurring = match expense.recurring_day {
            Some(day) => format!(" (monthly, {})", ordinal_day(day)),
            None => String::new(),
        };
        output.push_str(&format!(
            "{:<8}  {:<10}  {:<cat_width$}  {:>amount_width$}  {}{}\n",
            expense.id.short(),
            expense.date,
            expense.category,
            amount,
            expense.description,
            recurring,
            cat_width = cat_width,
            amount_width = amount_width,
        ));
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "\n{} expense(s), total {}\n",
        expenses.len(),
        currency.format(total)
    ));

    output
}

/// Format recurring expenses with their monthly total
pub fn format_recurring_list(data: &AppData, expenses: &[&Expense], currency: Currency) -> String {
    if expenses.is_empty() {
        return "No recurring expenses set up yet. Add your subscriptions and bills!".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Total Monthly Recurring: {}\n\n",
        currency.format(recurring_total(data))
    ));

    for expense in expenses {
        let day = expense
            .recurring_day
            .map(ordinal_day)
            .unwrap_or_else(|| "?".to_string());
        output.push_str(&format!(
            "  {:<8}  {}  {} - {} - every {} of the month\n",
            expense.id.short(),
            currency.format(expense.amount),
            expense.description,
            expense.category,
            day,
        ));
    }

    output
}

/// Format the budget table
pub fn format_budget_list(data: &AppData, currency: Currency) -> String {
    if data.budgets.is_empty() {
        return "No budgets set.".to_string();
    }

    let amounts: Vec<String> = data.budgets.values().map(|b| currency.format(*b)).collect();
    let cat_width = column_width(data.budgets.keys().map(|k| k.as_str()), "Category");
    let amount_width = column_width(amounts.iter().map(|a| a.as_str()), "Budget");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<cat_width$}  {:>amount_width$}\n",
        "Category",
        "Budget",
        cat_width = cat_width,
        amount_width = amount_width,
    ));
    output.push_str(&format!(
        "{:-<cat_width$}  {:->amount_width$}\n",
        "",
        "",
        cat_width = cat_width,
        amount_width = amount_width,
    ));
    for (category, amount) in data.budgets.keys().zip(&amounts) {
        output.push_str(&format!(
            "{:<cat_width$}  {:>amount_width$}\n",
            category,
            amount,
            cat_width = cat_width,
            amount_width = amount_width,
        ));
    }

    let total: f64 = data.budgets.values().sum();
    output.push_str(&format!("\nTotal monthly budget: {}\n", currency.format(total)));
    output
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, currency: Currency) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.description));
    output.push_str(&format!("  ID:        {}\n", expense.id));
    output.push_str(&format!("  Amount:    {}\n", currency.format(expense.amount)));
    output.push_str(&format!("  Category:  {}\n", expense.category));
    output.push_str(&format!("  Date:      {}\n", expense.date));
    if let Some(day) = expense.recurring_day {
        output.push_str(&format!("  Recurring: every {} of the month\n", ordinal_day(day)));
    }
    output.push_str(&format!(
        "  Created:   {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output
}
