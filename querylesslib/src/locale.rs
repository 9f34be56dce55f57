//! Locale resolution for column label lookups.

use crate::metadata::column::DEFAULT_LOCALE;

/// Supplies the active locale (e.g. `en_US`) for name lookups.
pub trait LocaleProvider: Send + Sync {
    fn locale(&self) -> String;
}

/// A locale that never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl Default for FixedLocale {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl LocaleProvider for FixedLocale {
    fn locale(&self) -> String {
        self.0.clone()
    }
}

impl<F> LocaleProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn locale(&self) -> String {
        self()
    }
}
