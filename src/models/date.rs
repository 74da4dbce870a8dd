//! Expense dates
//!
//! One-off expenses are dated with a plain `YYYY-MM-DD` day. Recurring
//! expenses written by other clients may carry a full RFC 3339 timestamp
//! instead (`2024-03-05T10:11:12.345Z`). Both forms are accepted, and the text
//! that was read is written back unchanged.

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// The date an expense occurred, as stored
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpenseDate {
    day: NaiveDate,
    raw: String,
}

impl ExpenseDate {
    /// Calendar day of the expense
    ///
    /// For a timestamp this is the day in the timestamp's own offset.
    pub fn naive_date(&self) -> NaiveDate {
        self.day
    }

    /// The stored text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the stored text is a full timestamp rather than a day
    pub fn is_timestamp(&self) -> bool {
        self.raw.contains('T')
    }
}

impl From<NaiveDate> for ExpenseDate {
    fn from(day: NaiveDate) -> Self {
        Self {
            day,
            raw: day.format(DAY_FORMAT).to_string(),
        }
    }
}

impl FromStr for ExpenseDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = NaiveDate::parse_from_str(s, DAY_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|ts| ts.date_naive()))
            .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD or RFC 3339", s))?;

        Ok(Self {
            day,
            raw: s.to_string(),
        })
    }
}

impl Ord for ExpenseDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day
            .cmp(&other.day)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for ExpenseDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.day.format(DAY_FORMAT).to_string())
    }
}

impl Serialize for ExpenseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for ExpenseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
