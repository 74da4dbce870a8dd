//! Expense categories
//!
//! Categories are free-form strings on each expense. These are the ones offered
//! by default when recording an expense or setting a budget.

/// Default expense categories
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Housing",
    "Transportation",
    "Food",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Subscriptions",
    "Other",
];

/// Resolve a user-typed category to its default spelling, if it is one
///
/// Matching is case-insensitive; anything else is returned trimmed as-is.
pub fn normalize_category(input: &str) -> String {
    let trimmed = input.trim();
    DEFAULT_CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(trimmed))
        .map(|c| c.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Check whether a category is one of the defaults
pub fn is_default_category(name: &str) -> bool {
    DEFAULT_CATEGORIES.iter().any(|c| c.eq_ignore_ascii_case(name.trim()))
}
