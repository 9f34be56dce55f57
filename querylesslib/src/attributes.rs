//! Namespaced data attributes attached to columns and tables.
//!
//! Attributes are formatting and display hints keyed by a
//! (namespace, name) pair. A report engine reads them to decide how a
//! column is labelled and how its numbers are formatted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Formatting attributes.
pub mod formatting {
    pub const NAMESPACE: &str = "urn:reporting:meta-attributes:formatting";
    /// Human readable column label
    pub const LABEL: &str = "label";
}

/// Numeric formatting hints.
pub mod numeric {
    pub const NAMESPACE: &str = "urn:reporting:meta-attributes:numeric";
    pub const CURRENCY: &str = "currency";
    pub const SCALE: &str = "scale";
    pub const SIGNED: &str = "signed";
    pub const PRECISION: &str = "precision";
}

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl AttributeValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(value.into())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Integer(i) => write!(f, "{}", i),
            AttributeValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A set of attributes: namespace -> name -> value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataAttributes {
    entries: BTreeMap<String, BTreeMap<String, AttributeValue>>,
}

/// Shared attribute set returned when nothing is known about a column.
pub static EMPTY_ATTRIBUTES: DataAttributes = DataAttributes::new();

impl DataAttributes {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Set `name` in `namespace`, replacing any previous value
    pub fn set(&mut self, namespace: &str, name: &str, value: impl Into<AttributeValue>) {
        self.entries
            .entry(namespace.to_string())
            .or_default()
            .insert(name.to_string(), value.into());
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<&AttributeValue> {
        self.entries.get(namespace).and_then(|attrs| attrs.get(name))
    }

    /// Namespaces that hold at least one attribute
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Attribute names within `namespace`
    pub fn names<'a>(&'a self, namespace: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .get(namespace)
            .into_iter()
            .flat_map(|attrs| attrs.keys().map(String::as_str))
    }

    /// All (namespace, name, value) triples in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &AttributeValue)> {
        self.entries.iter().flat_map(|(namespace, attrs)| {
            attrs
                .iter()
                .map(move |(name, value)| (namespace.as_str(), name.as_str(), value))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column and table attributes for one table, built in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetaData {
    columns: Vec<DataAttributes>,
    table: DataAttributes,
}

impl TableMetaData {
    /// Create metadata with `column_count` empty column attribute sets
    pub fn new(column_count: usize) -> Self {
        Self {
            columns: vec![DataAttributes::new(); column_count],
            table: DataAttributes::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Set a column attribute. Indices past the end are ignored.
    pub fn set_column_attribute(
        &mut self,
        column: usize,
        namespace: &str,
        name: &str,
        value: impl Into<AttributeValue>,
    ) {
        if let Some(attrs) = self.columns.get_mut(column) {
            attrs.set(namespace, name, value);
        }
    }

    pub fn column_attributes(&self, column: usize) -> Option<&DataAttributes> {
        self.columns.get(column)
    }

    pub fn table_attributes(&self) -> &DataAttributes {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut attrs = DataAttributes::new();
        attrs.set(formatting::NAMESPACE, formatting::LABEL, "Price");
        attrs.set(numeric::NAMESPACE, numeric::SCALE, 0_i64);
        attrs.set(numeric::NAMESPACE, numeric::SIGNED, false);

        assert_eq!(
            attrs.get(formatting::NAMESPACE, formatting::LABEL),
            Some(&AttributeValue::Text("Price".to_string()))
        );
        assert_eq!(
            attrs.get(numeric::NAMESPACE, numeric::SCALE).and_then(AttributeValue::as_integer),
            Some(0)
        );
        assert_eq!(
            attrs.get(numeric::NAMESPACE, numeric::SIGNED).and_then(AttributeValue::as_bool),
            Some(false)
        );
        assert!(attrs.get(numeric::NAMESPACE, numeric::CURRENCY).is_none());
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut attrs = DataAttributes::new();
        attrs.set(formatting::NAMESPACE, formatting::LABEL, "Old");
        attrs.set(formatting::NAMESPACE, formatting::LABEL, "New");

        assert_eq!(attrs.len(), 1);
        assert_eq!(
            attrs.get(formatting::NAMESPACE, formatting::LABEL).and_then(AttributeValue::as_text),
            Some("New")
        );
    }

    #[test]
    fn test_names_and_namespaces() {
        let mut attrs = DataAttributes::new();
        attrs.set(numeric::NAMESPACE, numeric::SCALE, 0_i64);
        attrs.set(numeric::NAMESPACE, numeric::PRECISION, i32::MAX);

        let namespaces: Vec<&str> = attrs.namespaces().collect();
        assert_eq!(namespaces, vec![numeric::NAMESPACE]);
        let names: Vec<&str> = attrs.names(numeric::NAMESPACE).collect();
        assert_eq!(names, vec![numeric::PRECISION, numeric::SCALE]);
        assert_eq!(attrs.names(formatting::NAMESPACE).count(), 0);
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(EMPTY_ATTRIBUTES.is_empty());
        assert_eq!(EMPTY_ATTRIBUTES.iter().count(), 0);
    }

    #[test]
    fn test_table_metadata_ignores_out_of_range_column() {
        let mut meta = TableMetaData::new(1);
        meta.set_column_attribute(5, formatting::NAMESPACE, formatting::LABEL, "x");

        assert_eq!(meta.column_count(), 1);
        assert!(meta.column_attributes(0).unwrap().is_empty());
        assert!(meta.column_attributes(5).is_none());
        assert!(meta.table_attributes().is_empty());
    }

    #[test]
    fn test_attributes_serialize_as_nested_map() {
        let mut attrs = DataAttributes::new();
        attrs.set(numeric::NAMESPACE, numeric::CURRENCY, false);
        attrs.set(numeric::NAMESPACE, numeric::SCALE, 0_i64);

        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json[numeric::NAMESPACE][numeric::CURRENCY], false);
        assert_eq!(json[numeric::NAMESPACE][numeric::SCALE], 0);
    }
}
