//! Expense identifiers
//!
//! New expenses get a random UUID, but stored ids are kept as opaque strings
//! so data written by other clients (e.g. `"1"`) loads unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for display: the first 8 characters
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Check whether `query` names this id, either fully or by a unique-looking prefix
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        !query.is_empty() && (self.0 == query || (query.len() >= 4 && self.0.starts_with(query)))
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for ExpenseId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_uuids() {
        let id = ExpenseId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, ExpenseId::new());
    }

    #[test]
    fn test_arbitrary_ids_are_kept() {
        let id: ExpenseId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(id.as_str(), "1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");
    }

    #[test]
    fn test_short() {
        let id = ExpenseId::from("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "550e8400");
        assert_eq!(ExpenseId::from("1").short(), "1");
    }

    #[test]
    fn test_matches() {
        let id = ExpenseId::from("550e8400-e29b-41d4-a716-446655440000");
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches("550e8400"));
        assert!(!id.matches("550"));
        assert!(!id.matches(""));
        assert!(ExpenseId::from("1").matches("1"));
    }
}
