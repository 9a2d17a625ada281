//! # loc2yaml
//!
//! Converts quoted key/value localization files into YAML.
//!
//! ## What does the input look like?
//!
//! One entry per line, an optional group header, `#` comments and an optional
//! numeric id between the colon and the value:
//!
//! ```text
//! l_english:
//!  # main menu
//!  menu_title: "Main Menu"
//!  menu_quit:0 "Quit to \"Desktop\""
//!  tooltip: "First line\nSecond line"   # shown on hover
//! ```
//!
//! which becomes
//!
//! ```text
//! l_english:
//!   menu_title: "Main Menu"
//!   menu_quit: "Quit to \"Desktop\""
//!   tooltip: |-
//!     First line
//!     Second line
//! ```
//!
//! ## Key Features
//!
//! - **Lenient**: malformed lines are skipped and reported with their line
//!   numbers; parsing never fails
//! - **Order preserving**: entries come out in input order, duplicate keys included
//! - **Block scalars**: values with embedded newlines are written as `|-` blocks
//! - **Pure core**: [`from_str`] and [`to_string`] share no state between calls
//!
//! ## Quick Start
//!
//! ```rust
//! use loc2yaml::{from_str, to_string};
//!
//! let result = from_str("l_english:\n greeting: \"Hello\"\n farewell: 12 \"Bye\"");
//! assert!(result.errors.is_empty());
//!
//! let yaml = to_string(&result);
//! assert_eq!(yaml, "l_english:\n  greeting: \"Hello\"\n  farewell: \"Bye\"");
//! ```
//!
//! ### One-shot Conversion
//!
//! [`convert`] runs both steps and skips serialization when nothing parsed,
//! which is what an interactive front end wants on every keystroke:
//!
//! ```rust
//! use loc2yaml::convert;
//!
//! let conversion = convert("# only a comment\n");
//! assert_eq!(conversion.output, "");
//! assert!(conversion.result.is_empty());
//! ```
//!
//! ### Building Inputs with loc! Macro
//!
//! ```rust
//! use loc2yaml::{loc, to_string};
//!
//! let result = loc!(root "l_english" { "title" => "Hi", "empty" => "" });
//! assert_eq!(to_string(&result), "l_english:\n  title: \"Hi\"\n  empty: \"\"");
//! ```
//!
//! ## Logging
//!
//! The parser emits `tracing` events (`debug` for skipped lines, `trace` for
//! every header and match). The library never installs a subscriber.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the full input and output rules.

pub mod de;
pub mod entry;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;

pub use de::{decode, Parser};
pub use entry::{Entry, ParseError, ParseResult};
pub use error::{Error, Result};
pub use map::KeyIndex;
pub use options::EmitOptions;
pub use ser::Serializer;

use serde::{Deserialize, Serialize};
use std::io;

/// Parse localization text.
///
/// Never fails: lines that look like entries but match neither entry form end
/// up in [`ParseResult::errors`].
///
/// # Examples
///
/// ```rust
/// use loc2yaml::from_str;
///
/// let result = from_str("foo: \"bar\"\nbad line: unquoted");
/// assert_eq!(result.entries.len(), 1);
/// assert_eq!(result.errors[0].line, 2);
/// assert_eq!(result.errors[0].content, "bad line: unquoted");
/// ```
#[must_use]
pub fn from_str(text: &str) -> ParseResult {
    Parser::new(text).parse()
}

/// Parse localization text from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8.
pub fn from_slice(bytes: &[u8]) -> Result<ParseResult> {
    let text = std::str::from_utf8(bytes)?;
    Ok(from_str(text))
}

/// Parse localization text from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use loc2yaml::from_reader;
/// use std::io::Cursor;
///
/// let result = from_reader(Cursor::new(b"foo: \"bar\"")).unwrap();
/// assert_eq!(result.entries[0].value, "bar");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
pub fn from_reader<R>(mut reader: R) -> Result<ParseResult>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}

/// Serialize a parse result to YAML with the default two-space indent.
///
/// With no entries the output is just the header line, or empty when there is
/// no root key.
#[must_use]
pub fn to_string(result: &ParseResult) -> String {
    to_string_with_options(result, EmitOptions::default())
}

/// Serialize a parse result to YAML with custom options.
#[must_use]
pub fn to_string_with_options(result: &ParseResult, options: EmitOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize(result);
    serializer.into_inner()
}

/// Serialize a parse result to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn to_writer<W>(writer: W, result: &ParseResult) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, result, EmitOptions::default())
}

/// Serialize a parse result to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn to_writer_with_options<W>(
    mut writer: W,
    result: &ParseResult,
    options: EmitOptions,
) -> Result<()>
where
    W: io::Write,
{
    let yaml = to_string_with_options(result, options);
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

/// The output of one [`convert`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// YAML text; empty when nothing parsed.
    pub output: String,
    pub result: ParseResult,
}

/// Parse, then serialize only if at least one entry was found.
///
/// # Examples
///
/// ```rust
/// use loc2yaml::convert;
///
/// let conversion = convert("l_english:\n");
/// assert_eq!(conversion.output, "");
/// assert_eq!(conversion.result.root_key.as_deref(), Some("l_english"));
///
/// let conversion = convert("a: \"x\\ny\"");
/// assert_eq!(conversion.output, "a: |-\n  x\n  y");
/// ```
#[must_use]
pub fn convert(text: &str) -> Conversion {
    convert_with_options(text, EmitOptions::default())
}

/// [`convert`] with custom emit options.
#[must_use]
pub fn convert_with_options(text: &str, options: EmitOptions) -> Conversion {
    let result = from_str(text);
    let output = if result.is_empty() {
        String::new()
    } else {
        to_string_with_options(&result, options)
    };
    Conversion { output, result }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry() {
        let result = from_str("foo: \"bar\"");
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].key, "foo");
        assert_eq!(result.entries[0].value, "bar");
        assert!(result.errors.is_empty());
        assert_eq!(to_string(&result), "foo: \"bar\"");
    }

    #[test]
    fn test_escaped_newline_becomes_block() {
        let conversion = convert(r#"foo: "a\nb""#);
        assert_eq!(conversion.output, "foo: |-\n  a\n  b");
    }

    #[test]
    fn test_malformed_line() {
        let result = from_str("bad line without colon-quote pattern: unquoted");
        assert!(result.entries.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line, 1);
        assert_eq!(
            result.errors[0].content,
            "bad line without colon-quote pattern: unquoted"
        );
    }

    #[test]
    fn test_empty_input() {
        let conversion = convert("");
        assert_eq!(conversion.result, ParseResult::default());
        assert_eq!(conversion.output, "");
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        assert!(matches!(from_slice(b"k: \"\xff\""), Err(Error::Utf8(_))));
    }

    #[test]
    fn test_to_writer() {
        let result = from_str("l_english:\nk: \"v\"");
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &result).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "l_english:\n  k: \"v\"");
    }

    #[test]
    fn test_pipeline_is_repeatable() {
        let input = "l_english:\n a: 1 \"x\"\n b: \"y\\tz\"\n oops: nope";
        assert_eq!(convert(input), convert(input));
    }
}
