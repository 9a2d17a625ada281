//! Ordered key index for duplicate-key diagnostics.
//!
//! The parser never merges entries that share a key: both survive into the
//! output. [`KeyIndex`] is a thin wrapper around [`IndexMap`] that records, for
//! each key, every source line it appears on. Keys iterate in first-seen order,
//! so diagnostics come out in the same order as the input.
//!
//! ## Examples
//!
//! ```rust
//! use loc2yaml::from_str;
//!
//! let result = from_str("a: \"1\"\nb: \"2\"\na: \"3\"");
//! let index = result.key_index();
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.get("a"), Some(&[1, 3][..]));
//!
//! let duplicates: Vec<_> = index.duplicates().map(|(key, _)| key).collect();
//! assert_eq!(duplicates, vec!["a"]);
//! ```

use crate::Entry;
use indexmap::IndexMap;

/// Maps each key to the 1-based lines it occurs on, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyIndex(IndexMap<String, Vec<usize>>);

impl KeyIndex {
    /// Creates an empty `KeyIndex`.
    #[must_use]
    pub fn new() -> Self {
        KeyIndex(IndexMap::new())
    }

    /// Indexes the keys of `entries`.
    #[must_use]
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut index = KeyIndex(IndexMap::with_capacity(entries.len()));
        for entry in entries {
            index.insert(&entry.key, entry.line);
        }
        index
    }

    /// Records one occurrence of `key` at `line`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loc2yaml::KeyIndex;
    ///
    /// let mut index = KeyIndex::new();
    /// index.insert("title", 4);
    /// index.insert("title", 9);
    /// assert_eq!(index.get("title"), Some(&[4, 9][..]));
    /// ```
    pub fn insert(&mut self, key: &str, line: usize) {
        match self.0.get_mut(key) {
            Some(lines) => lines.push(line),
            None => {
                self.0.insert(key.to_string(), vec![line]);
            }
        }
    }

    /// Returns the lines `key` occurs on.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[usize]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the distinct keys, in first-seen order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Vec<usize>> {
        self.0.keys()
    }

    /// Returns the keys seen more than once, with all of their lines.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.0
            .iter()
            .filter(|(_, lines)| lines.len() > 1)
            .map(|(key, lines)| (key.as_str(), lines.as_slice()))
    }
}
