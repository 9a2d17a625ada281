//! YAML serialization.
//!
//! This module provides the [`Serializer`] that turns a [`ParseResult`] into
//! YAML text.
//!
//! ## Overview
//!
//! Each entry becomes one mapping line, in source order. The style is picked
//! per value:
//!
//! - **Empty values** are written as `""`
//! - **Multi-line values** become literal block scalars (`|-`) with each line
//!   written verbatim one level deeper
//! - **Everything else** is double-quoted, with `"` escaped as `\"`
//!
//! When the input had a group header, it is written first and every entry is
//! indented one level under it. Lines are joined with `\n` and no trailing
//! newline is added.
//!
//! ## Usage
//!
//! ```rust
//! use loc2yaml::{from_str, to_string};
//!
//! let result = from_str("l_english:\n title: \"Say \\\"hi\\\"\"\n body: \"one\\ntwo\"");
//! assert_eq!(
//!     to_string(&result),
//!     "l_english:\n  title: \"Say \\\"hi\\\"\"\n  body: |-\n    one\n    two"
//! );
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use loc2yaml::{from_str, EmitOptions, Serializer};
//!
//! let result = from_str("greeting: \"Hello\"");
//! let mut serializer = Serializer::new(EmitOptions::new());
//! serializer.serialize(&result);
//! assert_eq!(serializer.into_inner(), "greeting: \"Hello\"");
//! ```

use crate::{EmitOptions, Entry, ParseResult};

/// The YAML serializer.
///
/// Accumulates output lines and joins them on [`Serializer::into_inner`].
/// Serialization is total: every `ParseResult` has an encoding.
pub struct Serializer {
    lines: Vec<String>,
    options: EmitOptions,
}

impl Serializer {
    pub fn new(options: EmitOptions) -> Self {
        Serializer {
            lines: Vec::new(),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.lines.join("\n")
    }

    /// Appends the header line (if any) and every entry of `result`.
    pub fn serialize(&mut self, result: &ParseResult) {
        let root = result.root_key.as_deref().filter(|root| !root.is_empty());
        let indent = match root {
            Some(root) => {
                self.lines.push(format!("{root}:"));
                self.options.unit()
            }
            None => String::new(),
        };

        self.lines.reserve(result.entries.len());
        for entry in &result.entries {
            self.write_entry(&indent, entry);
        }
    }

    fn write_entry(&mut self, indent: &str, entry: &Entry) {
        let key = &entry.key;
        if entry.value.is_empty() {
            self.lines.push(format!("{indent}{key}: \"\""));
        } else if entry.is_multiline() {
            self.lines.push(format!("{indent}{key}: |-"));
            let block_indent = format!("{indent}{}", self.options.unit());
            for line in entry.value.split('\n') {
                self.lines.push(format!("{block_indent}{line}"));
            }
        } else {
            self.lines.push(format!("{indent}{key}: \"{}\"", escape(&entry.value)));
        }
    }
}

/// Escapes `"` as `\"`; nothing else is touched.
#[inline]
fn escape(value: &str) -> String {
    value.replace('"', "\\\"")
}
