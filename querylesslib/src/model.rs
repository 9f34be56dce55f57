//! Table model contracts a report engine reads data through.
//!
//! Two capabilities are kept apart:
//!
//! - **TableModel**: shape and cell values
//! - **MetaTableModel**: namespaced attributes for columns, cells and the table
//!
//! A provider implements both; consumers that only need values take a
//! `TableModel`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::attributes::DataAttributes;
use crate::Result;

/// Value type a column produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnClass {
    Boolean,
    Date,
    /// Single-precision numeric column
    Float,
    String,
}

impl ColumnClass {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnClass::Boolean => "Boolean",
            ColumnClass::Date => "Date",
            ColumnClass::Float => "Float",
            ColumnClass::String => "String",
        }
    }
}

impl fmt::Display for ColumnClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(v) => write!(f, "{}", v),
            CellValue::Number(v) => write!(f, "{}", v),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Change notifications for a table model.
pub trait TableModelListener: Send + Sync {
    fn table_changed(&self);
}

/// Tabular data read by row and column index.
pub trait TableModel {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> Result<usize>;

    fn column_name(&self, column: usize) -> Result<String>;

    fn column_class(&self, column: usize) -> Result<ColumnClass>;

    fn value_at(&self, row: usize, column: usize) -> Result<CellValue>;

    fn is_cell_editable(&self, row: usize, column: usize) -> bool;

    fn set_value_at(&mut self, value: CellValue, row: usize, column: usize);

    fn add_listener(&mut self, listener: Arc<dyn TableModelListener>);

    fn remove_listener(&mut self, listener: &Arc<dyn TableModelListener>);

    /// Release anything the model holds open
    fn close(&mut self);
}

/// Attribute access for a table model.
pub trait MetaTableModel: TableModel {
    fn column_attributes(&self, column: usize) -> Result<&DataAttributes>;

    fn cell_attributes(&self, row: usize, column: usize) -> Option<&DataAttributes>;

    fn table_attributes(&self) -> Result<&DataAttributes>;

    fn is_cell_attributes_supported(&self) -> bool;
}
