//! Line-based parsing of localization text.
//!
//! This module provides the [`Parser`] that turns raw text into a
//! [`ParseResult`].
//!
//! ## Overview
//!
//! Each line is handled on its own, in order:
//!
//! - **Blank lines and `#` comments** are dropped
//! - **Group headers** (`l_english:`) set the root key; the last one wins
//! - **Lines without a colon** are dropped
//! - **Entry lines** are tried against an ordered list of matchers; the first
//!   match wins and the value is decoded
//! - **Anything else** is recorded as a [`ParseError`] and skipped
//!
//! Parsing never stops early and never fails.
//!
//! ## Usage
//!
//! ```rust
//! use loc2yaml::from_str;
//!
//! let result = from_str("l_english:\n title: 0 \"Hello\" # greeting\n body: \"A\\nB\"");
//!
//! assert_eq!(result.root_key.as_deref(), Some("l_english"));
//! assert_eq!(result.entries[0].value, "Hello");
//! assert_eq!(result.entries[1].value, "A\nB");
//! ```

use crate::{Entry, ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// A bare `key:` line: no quote or hash anywhere, colon last.
static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"^[^"#]+:\s*$"##).expect("valid header pattern"));

/// `key: "value"` with an optional trailing comment.
static PLAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"^(?P<key>[^:#\s][^:#]*?)\s*:\s*"(?P<value>.*)"(?:\s*#.*)?$"##)
        .expect("valid plain entry pattern")
});

/// `key: 12 "value"` with an optional trailing comment. Ids are ASCII digits only.
static ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"^(?P<key>[^:#\s][^:#]*?)\s*:\s*(?P<id>[0-9]+)\s*"(?P<value>.*)"(?:\s*#.*)?$"##)
        .expect("valid id entry pattern")
});

/// Entry matchers, tried in declaration order.
const MATCHERS: &[Matcher] = &[Matcher::Plain, Matcher::WithId];

/// The shape of one input line before entry matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Header(&'a str),
    NoSeparator,
    Candidate(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matcher {
    Plain,
    WithId,
}

/// Outcome of running the entry matchers over a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryMatch<'a> {
    Plain { key: &'a str, value: &'a str },
    WithId { key: &'a str, id: &'a str, value: &'a str },
    NoMatch,
}

impl Matcher {
    fn name(self) -> &'static str {
        match self {
            Matcher::Plain => "plain",
            Matcher::WithId => "with_id",
        }
    }

    fn apply(self, line: &str) -> EntryMatch<'_> {
        let regex = match self {
            Matcher::Plain => &*PLAIN_REGEX,
            Matcher::WithId => &*ID_REGEX,
        };
        let Some(caps) = regex.captures(line) else {
            return EntryMatch::NoMatch;
        };
        let (Some(key), Some(value)) = (caps.name("key"), caps.name("value")) else {
            return EntryMatch::NoMatch;
        };
        match (self, caps.name("id")) {
            (Matcher::WithId, Some(id)) => EntryMatch::WithId {
                key: key.as_str(),
                id: id.as_str(),
                value: value.as_str(),
            },
            (Matcher::Plain, _) => EntryMatch::Plain {
                key: key.as_str(),
                value: value.as_str(),
            },
            (Matcher::WithId, None) => EntryMatch::NoMatch,
        }
    }
}

impl<'a> EntryMatch<'a> {
    /// Runs every matcher in order and returns the first success.
    fn find(line: &'a str) -> Self {
        for matcher in MATCHERS {
            let found = matcher.apply(line);
            if found != EntryMatch::NoMatch {
                tracing::trace!(matcher = matcher.name(), "entry matched");
                return found;
            }
        }
        EntryMatch::NoMatch
    }

    /// Key and raw value; the numeric id is dropped here.
    fn into_parts(self) -> Option<(&'a str, &'a str)> {
        match self {
            EntryMatch::Plain { key, value } => Some((key, value)),
            EntryMatch::WithId { key, id, value } => {
                tracing::trace!(key, id, "dropping numeric id");
                Some((key, value))
            }
            EntryMatch::NoMatch => None,
        }
    }
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}

fn classify(trimmed: &str) -> Line<'_> {
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment;
    }
    if HEADER_REGEX.is_match(trimmed) {
        let name = trimmed.trim_end();
        let name = name.strip_suffix(':').unwrap_or(name);
        return Line::Header(name);
    }
    if !trimmed.contains(':') {
        return Line::NoSeparator;
    }
    Line::Candidate(trimmed)
}

/// Applies the four escape substitutions, in this order:
/// `\n` to newline, `\t` to tab, `\"` to `"`, then `""` to `"`.
///
/// This is plain text replacement; a later step can see characters produced
/// by an earlier one, and no other backslash sequence is touched.
///
/// # Examples
///
/// ```rust
/// use loc2yaml::decode;
///
/// assert_eq!(decode(r"one\ntwo"), "one\ntwo");
/// assert_eq!(decode(r"a\tb"), "a\tb");
/// assert_eq!(decode(r#"say \"hi\""#), "say \"hi\"");
/// assert_eq!(decode(r#"say ""hi"""#), "say \"hi\"");
/// assert_eq!(decode(r"C:\path"), r"C:\path");
/// ```
#[must_use]
pub fn decode(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\\"", "\"")
        .replace("\"\"", "\"")
}

/// The localization text parser.
///
/// Holds only the state that crosses line boundaries: the current root key
/// and the accumulated entries and errors. Created via [`Parser::new`] and
/// consumed by [`Parser::parse`].
pub struct Parser<'a> {
    input: &'a str,
    result: ParseResult,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            result: ParseResult::new(),
        }
    }

    pub fn parse(mut self) -> ParseResult {
        for (index, line) in self.input.lines().enumerate() {
            self.parse_line(index + 1, line);
        }

        tracing::debug!(
            entries = self.result.entries.len(),
            errors = self.result.errors.len(),
            root_key = self.result.root_key.as_deref().unwrap_or(""),
            "parsed localization text"
        );
        self.result
    }

    fn parse_line(&mut self, line_no: usize, line: &str) {
        let trimmed = trim_line(line);
        match classify(trimmed) {
            Line::Blank | Line::Comment | Line::NoSeparator => {}
            Line::Header(name) => {
                tracing::trace!(line = line_no, root_key = name, "group header");
                self.result.root_key = Some(name.to_string());
            }
            Line::Candidate(text) => match EntryMatch::find(text).into_parts() {
                Some((key, raw)) => {
                    self.result.entries.push(Entry {
                        key: key.trim().to_string(),
                        value: decode(raw),
                        raw_value: raw.to_string(),
                        line: line_no,
                    });
                }
                None => {
                    tracing::debug!(line = line_no, content = text, "skipping malformed line");
                    self.result.errors.push(ParseError {
                        line: line_no,
                        content: text.to_string(),
                    });
                }
            },
        }
    }
}
