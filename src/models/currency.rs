//! Display currency
//!
//! Amounts are stored as plain numbers; the currency only affects formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    #[default]
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Inr];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Inr => "Indian Rupee",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Inr => "INR",
        }
    }

    /// Format an amount with symbol and two decimals, e.g. `₹42.50`
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol(), amount)
    }

    /// Parse a currency code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "INR" => Some(Self::Inr),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
