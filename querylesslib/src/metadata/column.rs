//! Logical columns and their data types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale used when a localized string does not name one.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Declared data type of a logical column.
///
/// Only `Boolean`, `Date` and `Numeric` get dedicated placeholder values;
/// everything else is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Unknown,
    String,
    Date,
    Boolean,
    Numeric,
    Binary,
    Image,
    Url,
}

/// A display string with per-locale variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    /// Locale consulted when the requested one has no entry
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Locale (e.g. `en_US`, `de`) to text
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for LocalizedString {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizedString {
    /// Create an empty string with the default locale
    pub fn new() -> Self {
        Self {
            default_locale: default_locale(),
            strings: BTreeMap::new(),
        }
    }

    /// Builder: add text for a locale
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.strings.insert(locale.into(), text.into());
        self
    }

    /// Builder: change the fallback locale
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Look up the text for `locale`.
    ///
    /// Tries the exact locale, then its language part (`de_DE` -> `de`),
    /// then the default locale (and its language), then any entry at all.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.lookup(locale)
            .or_else(|| self.lookup(&self.default_locale))
            .or_else(|| self.strings.values().next().map(String::as_str))
    }

    fn lookup(&self, locale: &str) -> Option<&str> {
        if let Some(text) = self.strings.get(locale) {
            return Some(text);
        }
        let language = locale.split(['_', '-']).next().unwrap_or(locale);
        self.strings.get(language).map(String::as_str)
    }
}

/// Metadata-level description of a reportable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalColumn {
    /// Stable identifier, used as the column name
    pub id: String,
    /// Declared data type
    #[serde(default)]
    pub data_type: DataType,
    /// Localized display name, used as the column label
    #[serde(default)]
    pub name: LocalizedString,
}

impl LogicalColumn {
    pub fn new(id: impl Into<String>, data_type: DataType) -> Self {
        Self {
            id: id.into(),
            data_type,
            name: LocalizedString::new(),
        }
    }

    /// Builder: add a display name for a locale
    pub fn with_name(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.name = self.name.with(locale, text);
        self
    }

    /// Display name for `locale`, falling back to the identifier when no
    /// localized name exists.
    pub fn name(&self, locale: &str) -> String {
        self.name
            .get(locale)
            .map(str::to_string)
            .unwrap_or_else(|| self.id.clone())
    }
}
