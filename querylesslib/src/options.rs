//! Options controlling the placeholder values a queryless table produces.
//!
//! The row count is deliberately absent: it is fixed by `ROW_COUNT`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::messages::DEFAULT_STRING_KEY_PREFIX;

/// Base value for numeric columns; the row index is added to it.
pub const DEFAULT_NUMBER: f64 = 123.45;

/// Placeholder value configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerylessOptions {
    /// Date whose day-of-month is replaced by the row index
    pub reference_date: NaiveDate,
    /// Base value for numeric columns
    pub base_number: f64,
    /// Message key prefix for text columns
    pub message_key_prefix: String,
}

impl Default for QuerylessOptions {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            base_number: DEFAULT_NUMBER,
            message_key_prefix: DEFAULT_STRING_KEY_PREFIX.to_string(),
        }
    }
}

/// 2024-01-15, a mid-month date so both placeholder days stay readable.
fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default()
}

impl QuerylessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the reference date
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Builder: set the numeric base value
    pub fn base_number(mut self, value: f64) -> Self {
        self.base_number = value;
        self
    }

    /// Builder: set the message key prefix
    pub fn message_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.message_key_prefix = prefix.into();
        self
    }

    /// Message key for text placeholders in `row`
    pub fn message_key(&self, row: usize) -> String {
        format!("{}{}", self.message_key_prefix, row)
    }
}
