//! Input and Output Format Reference
//!
//! This module documents the localization input format accepted by
//! [`from_str`](crate::from_str) and the YAML subset written by
//! [`to_string`](crate::to_string). It contains no code.
//!
//! # Input
//!
//! Input is read one line at a time. Lines end with `\n` or `\r\n` and are
//! numbered from 1. Every line is trimmed before it is looked at.
//!
//! | Line (after trimming) | Effect |
//! |-----------------------|--------|
//! | empty | ignored |
//! | starts with `#` | ignored (comment) |
//! | `name:` with no `"` or `#` anywhere | sets the root key |
//! | contains no `:` | ignored |
//! | `key: "value"` | entry |
//! | `key: 12 "value"` | entry, the id is dropped |
//! | anything else | recorded as a parse error, skipped |
//!
//! ## Group Headers
//!
//! ```text
//! l_english:
//! ```
//!
//! A header sets the root key. When several headers appear, the last one
//! wins. Headers do not open a scope: entries before and after a header are
//! all siblings under the final root key.
//!
//! ## Entries
//!
//! ```text
//! key: "value"
//! key:0 "value"          # comment
//! key : 12   "value"
//! ```
//!
//! **Rules**:
//! - The key may not start with whitespace, `:` or `#`, and may not contain
//!   `:` or `#`. Surrounding whitespace is trimmed.
//! - The value runs from the first `"` after the separator (or id) to the last
//!   `"` on the line that is followed only by an optional `# comment`.
//!   Quotes inside the value need no escaping to be matched.
//! - The plain form is tried before the id form.
//!
//! ## Escapes
//!
//! Exactly four substitutions are applied to the raw value, in this order:
//!
//! ```text
//! \n  - newline
//! \t  - tab
//! \"  - quote
//! ""  - quote
//! ```
//!
//! Later steps see the output of earlier ones, so `\""` decodes to a single
//! `"`. Every other backslash is kept as is.
//!
//! ## Parse Errors
//!
//! A line that contains a `:` but matches neither entry form is skipped and
//! recorded with its line number and trimmed text:
//!
//! ```text
//! 3 | tooltip: Missing quotes
//! ```
//!
//! Parsing always continues to the end of the input.
//!
//! # Output
//!
//! ## Header
//!
//! With a root key, the first line is `<root>:` and every entry is indented
//! one level (two spaces by default):
//!
//! ```text
//! l_english:
//!   title: "Hello"
//! ```
//!
//! ## Scalars
//!
//! | Decoded value | Output |
//! |---------------|--------|
//! | empty | `key: ""` |
//! | contains a newline | `key: \|-` then each line one level deeper |
//! | anything else | `key: "value"` with `"` written as `\"` |
//!
//! Block lines are written verbatim. In quoted scalars only `"` is escaped;
//! tabs and backslashes pass through.
//!
//! ```text
//! tooltip: |-
//!   First line
//!   Second line
//! quote: "He said \"no\""
//! blank: ""
//! ```
//!
//! Lines are joined with `\n`; there is no trailing newline.
//!
//! # Edge Cases
//!
//! ## Empty Input
//!
//! Empty input, or input with only comments and blank lines, parses to no root
//! key, no entries and no errors. [`convert`](crate::convert) then returns an
//! empty string.
//!
//! ## Duplicate Keys
//!
//! Entries sharing a key are all kept, in input order, and all written out.
//! [`KeyIndex`](crate::KeyIndex) can list them for diagnostics.
//!
//! ## Re-parsing Output
//!
//! Quoted output lines are valid input lines, so single-line values survive
//! a second pass unchanged. Block scalar lines are not entry lines and are
//! dropped if the output is fed back in.
