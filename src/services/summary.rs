//! Monthly spending summary
//!
//! Totals for one calendar month compared against the category budgets.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::error::{VaultError, VaultResult};
use crate::models::{AppData, Expense};

/// Spending in one category for the month
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    /// Budget for the category, 0 when none is set
    pub budget: f64,
}

impl CategorySpending {
    pub fn is_over_budget(&self) -> bool {
        self.budget > 0.0 && self.amount > self.budget
    }
}

/// Spending summary for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_spent: f64,
    /// Sum of every category budget
    pub total_budget: f64,
    pub expense_count: usize,
    /// Sorted by amount, largest first
    pub categories: Vec<CategorySpending>,
}

impl MonthlySummary {
    /// Summarize expenses dated within `year`-`month`
    pub fn for_month(data: &AppData, year: i32, month: u32) -> VaultResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(VaultError::Validation(format!(
                "Invalid month: {}-{:02}",
                year, month
            )));
        }
        Ok(Self::build(data, year, month))
    }

    /// Summary for the month containing `date`
    pub fn containing(data: &AppData, date: NaiveDate) -> Self {
        Self::build(data, date.year(), date.month())
    }

    fn build(data: &AppData, year: i32, month: u32) -> Self {
        let in_month: Vec<&Expense> = data
            .expenses
            .iter()
            .filter(|e| {
                let day = e.date.naive_date();
                day.year() == year && day.month() == month
            })
            .collect();

        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for expense in &in_month {
            *totals.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
        }

        let mut categories: Vec<CategorySpending> = totals
            .into_iter()
            .map(|(category, amount)| CategorySpending {
                category: category.to_string(),
                amount,
                budget: data.budget_for(category),
            })
            .collect();
        categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        Self {
            year,
            month,
            total_spent: in_month.iter().map(|e| e.amount).sum(),
            total_budget: data.budgets.values().sum(),
            expense_count: in_month.len(),
            categories,
        }
    }

    /// Budget left after spending; negative when over
    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_spent > self.total_budget
    }

    /// Share of the total budget spent, as a percentage
    pub fn percent_used(&self) -> Option<f64> {
        (self.total_budget > 0.0).then(|| self.total_spent / self.total_budget * 100.0)
    }
}

/// Monthly cost of all recurring expenses
pub fn recurring_total(data: &AppData) -> f64 {
    data.recurring().map(|e| e.amount).sum()
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(s: &str) -> VaultResult<(i32, u32)> {
    let invalid = || VaultError::Validation(format!("Invalid month '{}', expected YYYY-MM", s));

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(invalid());
    }
    Ok((year, month))
}
