//! Error types for querylesslib

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while reading a queryless table model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuerylessError {
    /// An accessor that depends on the query was called before `set_query`
    #[error("no query has been assigned to the table model")]
    NoQuery,

    /// Column index outside the assigned query's selections
    #[error("column index {index} out of range (column count: {count})")]
    ColumnOutOfRange { index: usize, count: usize },

    /// Row index outside the fixed placeholder rows
    #[error("row index {row} out of range (row count: {row_count})")]
    RowOutOfRange { row: usize, row_count: usize },

    /// Setting the day-of-month on the reference date left the calendar
    #[error("cannot set day {day} on reference date {reference}")]
    InvalidDate { day: usize, reference: NaiveDate },

    /// Malformed message catalog input
    #[error("invalid message catalog at line {line}: {message}")]
    InvalidMessages { line: usize, message: String },
}
