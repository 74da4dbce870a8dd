//! The plaintext application payload
//!
//! This is what gets serialized to JSON and encrypted as one blob.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::expense::Expense;
use super::ids::ExpenseId;
use crate::error::{VaultError, VaultResult};

/// Monthly budget per category
pub type Budgets = BTreeMap<String, f64>;

/// All user data: expenses and budgets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub budgets: Budgets,
}

impl AppData {
    /// Empty data used before anything is stored
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.budgets.is_empty()
    }

    /// Check that every amount and budget is a finite number
    ///
    /// JSON cannot represent NaN or infinity; serde_json writes them as `null`,
    /// which would never parse back.
    pub fn check_amounts(&self) -> VaultResult<()> {
        if let Some(expense) = self.expenses.iter().find(|e| !e.amount.is_finite()) {
            return Err(VaultError::Validation(format!(
                "Expense {} has a non-finite amount",
                expense.id.short()
            )));
        }
        if let Some((category, _)) = self.budgets.iter().find(|(_, b)| !b.is_finite()) {
            return Err(VaultError::Validation(format!(
                "Budget for {} is not a finite number",
                category
            )));
        }
        Ok(())
    }

    /// Serialize to the canonical string form that gets encrypted
    ///
    /// Budgets are kept in a sorted map, so equal data always yields equal text.
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a decrypted payload
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Find an expense by exact id
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Find an expense by full id or id prefix
    pub fn find_expense(&self, query: &str) -> Option<&Expense> {
        self.expenses
            .iter()
            .find(|e| e.id.as_str() == query.trim())
            .or_else(|| self.expenses.iter().find(|e| e.id.matches(query)))
    }

    /// Recurring expenses, in stored order
    pub fn recurring(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().filter(|e| e.is_recurring)
    }

    /// Budget set for a category, 0 when unset
    pub fn budget_for(&self, category: &str) -> f64 {
        self.budgets.get(category).copied().unwrap_or(0.0)
    }
}
