//! The queryless table model: placeholder rows derived from column metadata.
//!
//! Used as the data source of parameter queries when nothing should be
//! executed. Every column gets two deterministic values chosen from its
//! declared data type:
//!
//! | Data type | Class     | Row 0                          | Row 1                  |
//! |-----------|-----------|--------------------------------|------------------------|
//! | Boolean   | `Boolean` | `0`                            | `1`                    |
//! | Date      | `Date`    | last day of the previous month | first day of the month |
//! | Numeric   | `Float`   | `123.45`                       | `124.45`               |
//! | other     | `String`  | message `<prefix>0`            | message `<prefix>1`    |
//!
//! Dates come from the reference date with its day-of-month set to the row
//! index, using lenient calendar arithmetic (day 0 is the day before the 1st).

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::sync::Arc;

use crate::attributes::{formatting, numeric, DataAttributes, TableMetaData, EMPTY_ATTRIBUTES};
use crate::error::QuerylessError;
use crate::locale::{FixedLocale, LocaleProvider};
use crate::messages::{MessageCatalog, MessageSource};
use crate::metadata::{DataType, LogicalColumn, Query};
use crate::model::{CellValue, ColumnClass, MetaTableModel, TableModel, TableModelListener};
use crate::options::QuerylessOptions;
use crate::Result;

/// Number of placeholder rows.
///
/// Parameter queries need every value in a column to be unique, and a
/// boolean column only has two distinct values. Must stay at 2.
pub const ROW_COUNT: usize = 2;

const _: () = assert!(ROW_COUNT == 2, "boolean columns only have two unique values");

/// Precision hint for numeric placeholder columns.
pub const NUMERIC_PRECISION: i32 = i32::MAX;

/// Map a declared data type to the class of value the column produces.
pub fn classify(data_type: DataType) -> ColumnClass {
    match data_type {
        DataType::Boolean => ColumnClass::Boolean,
        DataType::Date => ColumnClass::Date,
        DataType::Numeric => ColumnClass::Float,
        _ => ColumnClass::String,
    }
}

/// Read-only table model with two synthetic rows per query.
///
/// Assign a query with [`set_query`](Self::set_query) before reading
/// columns; accessors that need one return [`QuerylessError::NoQuery`]
/// until then.
pub struct QuerylessTableModel {
    query: Option<Arc<Query>>,
    meta_data: Option<TableMetaData>,
    options: QuerylessOptions,
    locale: Arc<dyn LocaleProvider>,
    messages: Arc<dyn MessageSource>,
}

impl Default for QuerylessTableModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuerylessTableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuerylessTableModel")
            .field("query", &self.query)
            .field("meta_data", &self.meta_data)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl QuerylessTableModel {
    /// Create an empty model using `en_US` and the built-in English messages.
    pub fn new() -> Self {
        Self::with_services(
            Arc::new(FixedLocale::default()),
            Arc::new(MessageCatalog::builtin()),
        )
    }

    /// Create an empty model with the given locale and message services.
    pub fn with_services(locale: Arc<dyn LocaleProvider>, messages: Arc<dyn MessageSource>) -> Self {
        Self {
            query: None,
            meta_data: None,
            options: QuerylessOptions::default(),
            locale,
            messages,
        }
    }

    /// Builder: set placeholder options
    pub fn options(mut self, options: QuerylessOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder: set the locale service
    pub fn locale(mut self, locale: Arc<dyn LocaleProvider>) -> Self {
        self.locale = locale;
        self
    }

    /// Builder: set the message service
    pub fn messages(mut self, messages: Arc<dyn MessageSource>) -> Self {
        self.messages = messages;
        self
    }

    /// The assigned query, shared with the caller that assigned it
    pub fn query(&self) -> Option<&Arc<Query>> {
        self.query.as_ref()
    }

    /// Assign the query and rebuild all column metadata.
    ///
    /// Each column gets its localized label. Numeric columns also get
    /// integer formatting hints. Metadata from a previous query is discarded.
    pub fn set_query(&mut self, query: Arc<Query>) {
        let locale = self.locale.locale();
        let mut meta_data = TableMetaData::new(query.selections.len());

        log::debug!(
            "building queryless metadata for {} columns (locale {})",
            query.selections.len(),
            locale
        );

        for (column, selection) in query.selections.iter().enumerate() {
            let logical = &selection.logical_column;
            meta_data.set_column_attribute(
                column,
                formatting::NAMESPACE,
                formatting::LABEL,
                logical.name(&locale),
            );
            if classify(logical.data_type) == ColumnClass::Float {
                meta_data.set_column_attribute(column, numeric::NAMESPACE, numeric::CURRENCY, false);
                meta_data.set_column_attribute(column, numeric::NAMESPACE, numeric::SCALE, 0_i64);
                meta_data.set_column_attribute(column, numeric::NAMESPACE, numeric::SIGNED, false);
                meta_data.set_column_attribute(
                    column,
                    numeric::NAMESPACE,
                    numeric::PRECISION,
                    NUMERIC_PRECISION,
                );
            }
        }

        self.query = Some(query);
        self.meta_data = Some(meta_data);
    }

    fn logical_column(&self, column: usize) -> Result<&LogicalColumn> {
        let query = self.query.as_ref().ok_or(QuerylessError::NoQuery)?;
        query.column(column).ok_or(QuerylessError::ColumnOutOfRange {
            index: column,
            count: query.selections.len(),
        })
    }

    fn placeholder_date(&self, row: usize) -> Result<NaiveDate> {
        let reference = self.options.reference_date;
        reference
            .with_day(1)
            .and_then(|first| first.pred_opt())
            .and_then(|day_zero| day_zero.checked_add_days(Days::new(row as u64)))
            .ok_or(QuerylessError::InvalidDate { day: row, reference })
    }
}

impl TableModel for QuerylessTableModel {
    fn row_count(&self) -> usize {
        ROW_COUNT
    }

    fn column_count(&self) -> Result<usize> {
        self.query
            .as_ref()
            .map(|q| q.selections.len())
            .ok_or(QuerylessError::NoQuery)
    }

    /// The logical column's identifier, not its display label.
    fn column_name(&self, column: usize) -> Result<String> {
        Ok(self.logical_column(column)?.id.clone())
    }

    fn column_class(&self, column: usize) -> Result<ColumnClass> {
        Ok(classify(self.logical_column(column)?.data_type))
    }

    fn value_at(&self, row: usize, column: usize) -> Result<CellValue> {
        let class = self.column_class(column)?;
        if row >= ROW_COUNT {
            return Err(QuerylessError::RowOutOfRange {
                row,
                row_count: ROW_COUNT,
            });
        }

        log::trace!("synthesizing {} value at ({}, {})", class, row, column);

        let value = match class {
            // Kept as integer 0/1; consumers of this model read booleans that way.
            ColumnClass::Boolean => CellValue::Integer((row % 2) as i64),
            ColumnClass::Date => CellValue::Date(self.placeholder_date(row)?),
            ColumnClass::Float => CellValue::Number(self.options.base_number + row as f64),
            ColumnClass::String => {
                let key = self.options.message_key(row);
                let column_arg = column.to_string();
                CellValue::Text(self.messages.message(&key, &[column_arg.as_str()]))
            }
        };
        Ok(value)
    }

    fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        false
    }

    fn set_value_at(&mut self, _value: CellValue, _row: usize, _column: usize) {}

    // The data never changes after set_query, so there is nothing to notify.
    fn add_listener(&mut self, _listener: Arc<dyn TableModelListener>) {}

    fn remove_listener(&mut self, _listener: &Arc<dyn TableModelListener>) {}

    fn close(&mut self) {}
}

impl MetaTableModel for QuerylessTableModel {
    fn column_attributes(&self, column: usize) -> Result<&DataAttributes> {
        match &self.meta_data {
            None => Ok(&EMPTY_ATTRIBUTES),
            Some(meta_data) => {
                meta_data
                    .column_attributes(column)
                    .ok_or(QuerylessError::ColumnOutOfRange {
                        index: column,
                        count: meta_data.column_count(),
                    })
            }
        }
    }

    fn cell_attributes(&self, _row: usize, _column: usize) -> Option<&DataAttributes> {
        None
    }

    fn table_attributes(&self) -> Result<&DataAttributes> {
        self.meta_data
            .as_ref()
            .map(TableMetaData::table_attributes)
            .ok_or(QuerylessError::NoQuery)
    }

    fn is_cell_attributes_supported(&self) -> bool {
        false
    }
}
