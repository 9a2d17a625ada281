//! Parsed representation of a localization file.
//!
//! This module provides the three record types produced by the parser:
//!
//! - [`ParseResult`]: the root key, the ordered entries and the ordered parse errors
//! - [`Entry`]: one key with its decoded value and the raw text it was decoded from
//! - [`ParseError`]: one skipped line, with its 1-based line number
//!
//! ## Usage Patterns
//!
//! ### Inspecting a Parse
//!
//! ```rust
//! use loc2yaml::from_str;
//!
//! let result = from_str("l_english:\n greeting: \"Hello\"\n broken: yes");
//!
//! assert_eq!(result.root_key.as_deref(), Some("l_english"));
//! assert_eq!(result.entries[0].key, "greeting");
//! assert_eq!(result.errors[0].line, 3);
//! assert_eq!(
//!     result.summary().as_deref(),
//!     Some("Skipped 1 line(s). Check formatting near: broken: yes")
//! );
//! ```
//!
//! ### Exporting as JSON
//!
//! All types derive `Serialize`/`Deserialize` with camelCase field names, so a
//! parse result can be handed to any serde format:
//!
//! ```rust
//! use loc2yaml::from_str;
//!
//! let result = from_str("foo: \"bar\"");
//! let json = serde_json::to_string(&result).unwrap();
//! assert!(json.contains("\"rootKey\":null"));
//! assert!(json.contains("\"rawValue\":\"bar\""));
//! ```

use crate::KeyIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of parsing one input text.
///
/// A `ParseResult` is built from scratch on every parse and is never updated
/// incrementally. Entries keep source order and duplicate keys are kept as
/// separate entries.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// The last bare `key:` header seen in the input, if any.
    pub root_key: Option<String>,
    pub entries: Vec<Entry>,
    pub errors: Vec<ParseError>,
}

/// One key/value pair.
///
/// # Examples
///
/// ```rust
/// use loc2yaml::from_str;
///
/// let result = from_str(r#"motd: 3 "Line one\nLine two""#);
/// let entry = &result.entries[0];
///
/// assert_eq!(entry.key, "motd");
/// assert_eq!(entry.value, "Line one\nLine two");
/// assert_eq!(entry.raw_value, r"Line one\nLine two");
/// assert!(entry.is_multiline());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub key: String,
    /// Value after the escape substitutions have been applied.
    pub value: String,
    /// Value exactly as it appeared between the quotes.
    pub raw_value: String,
    /// 1-based source line.
    pub line: usize,
}

/// A line that looked like an entry but matched neither entry form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// 1-based line number in the original input.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
}

impl ParseResult {
    /// Creates an empty result with no root key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no entries were parsed.
    ///
    /// Callers use this to decide whether to serialize at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if at least one line was skipped as malformed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn first_error(&self) -> Option<&ParseError> {
        self.errors.first()
    }

    /// One-line, user-facing description of the skipped lines.
    ///
    /// Only the count and the first offending line are mentioned; the full
    /// list stays available in [`ParseResult::errors`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loc2yaml::from_str;
    ///
    /// assert_eq!(from_str("ok: \"fine\"").summary(), None);
    ///
    /// let result = from_str("a: b\nc: d");
    /// assert_eq!(
    ///     result.summary().unwrap(),
    ///     "Skipped 2 line(s). Check formatting near: a: b"
    /// );
    /// ```
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.first_error().map(|first| {
            format!(
                "Skipped {} line(s). Check formatting near: {}",
                self.errors.len(),
                first.content
            )
        })
    }

    /// Builds an ordered index of keys to the lines they occur on.
    #[must_use]
    pub fn key_index(&self) -> KeyIndex {
        KeyIndex::from_entries(&self.entries)
    }
}

impl Entry {
    /// Returns `true` if the decoded value spans more than one line.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.value.contains('\n')
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.content)
    }
}
