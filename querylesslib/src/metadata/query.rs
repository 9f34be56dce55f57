//! Query descriptor: the ordered selections a report requested.

use serde::{Deserialize, Serialize};

use super::column::LogicalColumn;

/// One entry in a query's output list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Column this selection reads
    pub logical_column: LogicalColumn,
}

impl Selection {
    pub fn new(logical_column: LogicalColumn) -> Self {
        Self { logical_column }
    }
}

impl From<LogicalColumn> for Selection {
    fn from(logical_column: LogicalColumn) -> Self {
        Self::new(logical_column)
    }
}

/// A query descriptor. Read-only from the table model's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Selections in output order
    #[serde(default)]
    pub selections: Vec<Selection>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a selection for `column`
    pub fn select(mut self, column: LogicalColumn) -> Self {
        self.selections.push(Selection::new(column));
        self
    }

    /// Logical column of the selection at `index`, if any
    pub fn column(&self, index: usize) -> Option<&LogicalColumn> {
        self.selections.get(index).map(|s| &s.logical_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::DataType;

    #[test]
    fn test_select_keeps_order() {
        let query = Query::new()
            .select(LogicalColumn::new("A", DataType::String))
            .select(LogicalColumn::new("B", DataType::Numeric));

        assert_eq!(query.selections.len(), 2);
        assert_eq!(query.column(0).unwrap().id, "A");
        assert_eq!(query.column(1).unwrap().id, "B");
        assert!(query.column(2).is_none());
    }

    #[test]
    fn test_query_from_json() {
        let json = r#"{
            "selections": [
                {"logical_column": {"id": "PAID", "data_type": "boolean"}},
                {"logical_column": {
                    "id": "ORDER_DATE",
                    "data_type": "date",
                    "name": {"strings": {"en_US": "Order Date"}}
                }}
            ]
        }"#;
        let query: Query = serde_json::from_str(json).unwrap();

        assert_eq!(query.selections.len(), 2);
        assert_eq!(query.column(0).unwrap().data_type, DataType::Boolean);
        assert_eq!(query.column(1).unwrap().name("en_US"), "Order Date");
    }

    #[test]
    fn test_empty_query_from_json() {
        let query: Query = serde_json::from_str("{}").unwrap();
        assert!(query.selections.is_empty());
    }
}
