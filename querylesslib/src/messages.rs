//! Localized message lookup for placeholder text.
//!
//! Text columns are filled with messages looked up by key, so a host can
//! ship per-language sample values. `MessageCatalog` reads the same
//! `.properties` format that report bundles already use for their messages.

use std::collections::HashMap;

use crate::error::QuerylessError;
use crate::Result;

/// Key prefix for placeholder text; the row index is appended.
pub const DEFAULT_STRING_KEY_PREFIX: &str = "QuerylessTableModel.DEFAULT_STRING_VALUE_ROW_";

/// Resolves a message key to display text, substituting positional arguments.
pub trait MessageSource: Send + Sync {
    fn message(&self, key: &str, args: &[&str]) -> String;
}

impl<F> MessageSource for F
where
    F: Fn(&str, &[&str]) -> String + Send + Sync,
{
    fn message(&self, key: &str, args: &[&str]) -> String {
        self(key, args)
    }
}

/// In-memory message table with `{n}` placeholder substitution.
///
/// Unknown keys render as `!key!` so gaps in a translation show up in
/// previews instead of disappearing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// English placeholder text for both rows.
    pub fn builtin() -> Self {
        Self::new()
            .with(format!("{}0", DEFAULT_STRING_KEY_PREFIX), "Sample Value {0}-1")
            .with(format!("{}1", DEFAULT_STRING_KEY_PREFIX), "Sample Value {0}-2")
    }

    /// Builder: add or replace a message pattern
    pub fn with(mut self, key: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.insert(key, pattern);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, pattern: impl Into<String>) {
        self.messages.insert(key.into(), pattern.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Merge `other` into this catalog; entries in `other` win.
    pub fn extend(&mut self, other: MessageCatalog) {
        self.messages.extend(other.messages);
    }

    /// Parse `.properties` text.
    ///
    /// Supports `key=value`, `key: value` and `key value` lines, `#` and `!`
    /// comments, values continued with a trailing backslash, and `\uXXXX`
    /// escapes.
    pub fn from_properties(text: &str) -> Result<Self> {
        let mut catalog = Self::new();
        let mut lines = text.lines().enumerate();

        while let Some((index, raw)) = lines.next() {
            let line = raw.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let mut logical = line.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => {
                        return Err(QuerylessError::InvalidMessages {
                            line: index + 1,
                            message: "line continuation at end of input".to_string(),
                        })
                    }
                }
            }

            let (key, value) = split_property(&logical);
            if key.is_empty() {
                return Err(QuerylessError::InvalidMessages {
                    line: index + 1,
                    message: "missing key".to_string(),
                });
            }
            catalog.insert(unescape(key, index + 1)?, unescape(value, index + 1)?);
        }

        Ok(catalog)
    }
}

impl MessageSource for MessageCatalog {
    fn message(&self, key: &str, args: &[&str]) -> String {
        match self.get(key) {
            Some(pattern) => format_message(pattern, args),
            None => format!("!{}!", key),
        }
    }
}

/// Replace `{n}` in `pattern` with `args[n]`.
///
/// Quoting follows `java.text.MessageFormat`: `''` is a literal apostrophe
/// and text between single quotes is copied as is, so `'{0}'` stays `{0}`.
/// Placeholders with no matching argument are kept verbatim.
pub fn format_message(pattern: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.char_indices().peekable();
    let mut quoted = false;

    while let Some((i, c)) = chars.next() {
        match c {
            '\'' => {
                if chars.next_if(|(_, next)| *next == '\'').is_some() {
                    out.push('\'');
                } else {
                    quoted = !quoted;
                }
            }
            '{' if !quoted => match placeholder(&pattern[i + 1..], args) {
                Some((value, consumed)) => {
                    out.push_str(value);
                    let end = i + 1 + consumed;
                    while chars.next_if(|(j, _)| *j < end).is_some() {}
                }
                None => out.push('{'),
            },
            _ => out.push(c),
        }
    }
    out
}

/// Argument for a `{n}` placeholder starting right after the brace, with the
/// number of bytes up to and including the closing brace.
fn placeholder<'a>(after: &str, args: &[&'a str]) -> Option<(&'a str, usize)> {
    let close = after.find('}')?;
    let index = after[..close].trim().parse::<usize>().ok()?;
    args.get(index).map(|value| (*value, close + 1))
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_property(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (line[..i].trim_end(), line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let value = line[i..].trim_start();
                let value = value
                    .strip_prefix(['=', ':'])
                    .map(str::trim_start)
                    .unwrap_or(value);
                return (&line[..i], value);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(text: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => out.push(unicode_escape(&mut chars, line)?),
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// Decode the digits of a `\uXXXX` escape. A high surrogate must be followed
/// by a `\uXXXX` low surrogate, as Java writes characters outside the BMP.
fn unicode_escape(chars: &mut std::str::Chars<'_>, line: usize) -> Result<char> {
    let malformed = |found: &str| QuerylessError::InvalidMessages {
        line,
        message: format!("malformed \\uXXXX escape '\\u{}'", found),
    };

    let high = hex4(chars).map_err(|found| malformed(&found))?;
    if !(0xD800..0xDC00).contains(&high) {
        return char::from_u32(high).ok_or_else(|| malformed(&format!("{:04x}", high)));
    }

    let low = match (chars.next(), chars.next()) {
        (Some('\\'), Some('u')) => hex4(chars).map_err(|found| malformed(&found))?,
        _ => return Err(malformed(&format!("{:04x}", high))),
    };
    if !(0xDC00..0xE000).contains(&low) {
        return Err(malformed(&format!("{:04x}", low)));
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
        .ok_or_else(|| malformed(&format!("{:04x}", low)))
}

fn hex4(chars: &mut std::str::Chars<'_>) -> std::result::Result<u32, String> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        u32::from_str_radix(&digits, 16).map_err(|_| digits)
    } else {
        Err(digits)
    }
}
