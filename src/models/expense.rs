//! Expense model
//!
//! A single expense record. Field names serialize in camelCase so the
//! encrypted payload keeps the `{id, amount, category, description, date,
//! isRecurring, recurringDay, createdAt}` shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::ExpenseDate;
use super::ids::ExpenseId;

/// Earliest day of month a recurring expense may fall on
pub const MIN_RECURRING_DAY: u8 = 1;

/// Latest day of month a recurring expense may fall on (valid in every month)
pub const MAX_RECURRING_DAY: u8 = 28;

/// An expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent, non-negative
    pub amount: f64,

    /// Category name
    pub category: String,

    /// Free-form description
    pub description: String,

    /// Date the expense occurred
    pub date: ExpenseDate,

    /// Whether this expense repeats monthly
    #[serde(default)]
    pub is_recurring: bool,

    /// Day of month a recurring expense falls on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_day: Option<u8>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating an expense; id and creation time are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub recurring_day: Option<u8>,
}

impl NewExpense {
    /// A one-off expense
    pub fn one_off(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
            recurring_day: None,
        }
    }

    /// A monthly recurring expense
    pub fn recurring(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        day: u8,
    ) -> Self {
        Self {
            recurring_day: Some(day),
            ..Self::one_off(amount, category, description, date)
        }
    }
}

/// Field-wise patch applied by an update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    /// `Some(None)` makes the expense one-off, `Some(Some(day))` makes it recurring
    pub recurring_day: Option<Option<u8>>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Expense {
    /// Create a new expense with a fresh id, stamped now
    pub fn new(input: NewExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            amount: input.amount,
            category: input.category.trim().to_string(),
            description: input.description.trim().to_string(),
            date: input.date.into(),
            is_recurring: input.recurring_day.is_some(),
            recurring_day: input.recurring_day,
            created_at: Utc::now(),
        }
    }

    /// Apply a patch in place
    pub fn apply(&mut self, update: ExpenseUpdate) {
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(category) = update.category {
            self.category = category.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(date) = update.date {
            self.date = date.into();
        }
        if let Some(day) = update.recurring_day {
            self.is_recurring = day.is_some();
            self.recurring_day = day;
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::AmountNotFinite);
        }

        if self.amount < 0.0 {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        match (self.is_recurring, self.recurring_day) {
            (true, None) => return Err(ExpenseValidationError::MissingRecurringDay),
            (false, Some(_)) => return Err(ExpenseValidationError::UnexpectedRecurringDay),
            (true, Some(day)) if !(MIN_RECURRING_DAY..=MAX_RECURRING_DAY).contains(&day) => {
                return Err(ExpenseValidationError::RecurringDayOutOfRange(day));
            }
            _ => {}
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.description, self.category)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    AmountNotFinite,
    NegativeAmount(f64),
    EmptyCategory,
    EmptyDescription,
    MissingRecurringDay,
    UnexpectedRecurringDay,
    RecurringDayOutOfRange(u8),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountNotFinite => write!(f, "Amount must be a finite number"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::MissingRecurringDay => {
                write!(f, "Recurring expenses need a day of month")
            }
            Self::UnexpectedRecurringDay => {
                write!(f, "Only recurring expenses can have a day of month")
            }
            Self::RecurringDayOutOfRange(day) => write!(
                f,
                "Recurring day must be between {} and {} (got {})",
                MIN_RECURRING_DAY, MAX_RECURRING_DAY, day
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
