//! # querylesslib
//!
//! A placeholder table model for report parameter queries that should not
//! touch a real data source.
//!
//! ## Overview
//!
//! In "queryless" mode a report still needs sample values to render
//! parameter widgets and previews. This library takes a query descriptor
//! (an ordered list of logical columns with declared data types) and
//! exposes a fixed two-row table whose values are derived from each
//! column's type:
//!
//! - **Boolean**: `0` and `1`, unique per row
//! - **Date**: the reference date with its day-of-month set to the row index
//! - **Numeric**: `123.45` and `124.45`
//! - **Anything else**: localized placeholder text from a message catalog
//!
//! Alongside the values it builds per-column attributes: the localized
//! column label, and integer formatting hints for numeric columns.
//!
//! ## Features
//!
//! - **Two small contracts**: `TableModel` for values, `MetaTableModel` for attributes
//! - **Injected services**: locale and message lookups are traits, closures work too
//! - **Deterministic**: no clock, no I/O, no shared state
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use querylesslib::{
//!     CellValue, DataType, LogicalColumn, MetaTableModel, Query, QuerylessTableModel, TableModel,
//! };
//!
//! let query = Query::new()
//!     .select(LogicalColumn::new("PAID", DataType::Boolean))
//!     .select(LogicalColumn::new("PRICE", DataType::Numeric).with_name("en_US", "Price"));
//!
//! let mut model = QuerylessTableModel::new();
//! model.set_query(Arc::new(query));
//!
//! assert_eq!(model.row_count(), 2);
//! assert_eq!(model.column_count().unwrap(), 2);
//! assert_eq!(model.value_at(1, 0).unwrap(), CellValue::Integer(1));
//! assert_eq!(model.value_at(0, 1).unwrap(), CellValue::Number(123.45));
//! assert_eq!(model.column_attributes(1).unwrap().len(), 5);
//! ```

pub mod attributes;
pub mod error;
pub mod locale;
pub mod messages;
pub mod metadata;
pub mod model;
pub mod options;
pub mod queryless;

pub use attributes::{
    formatting, numeric, AttributeValue, DataAttributes, TableMetaData, EMPTY_ATTRIBUTES,
};
pub use error::QuerylessError;
pub use locale::{FixedLocale, LocaleProvider};
pub use messages::{format_message, MessageCatalog, MessageSource, DEFAULT_STRING_KEY_PREFIX};
pub use metadata::{DataType, LocalizedString, LogicalColumn, Query, Selection};
pub use model::{CellValue, ColumnClass, MetaTableModel, TableModel, TableModelListener};
pub use options::{QuerylessOptions, DEFAULT_NUMBER};
pub use queryless::{classify, QuerylessTableModel, NUMERIC_PRECISION, ROW_COUNT};

/// Result type for querylesslib operations
pub type Result<T> = std::result::Result<T, QuerylessError>;
