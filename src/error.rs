//! Error types for the I/O boundary of the converter.
//!
//! Parsing itself never fails: malformed lines are recorded as
//! [`ParseError`](crate::ParseError) values inside the
//! [`ParseResult`](crate::ParseResult) and the parser moves on. The [`Error`]
//! type here only covers the helpers that touch readers, writers or raw bytes.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading input or writing output failed
//! - **Encoding Errors**: input bytes were not valid UTF-8
//!
//! ## Examples
//!
//! ```rust
//! use loc2yaml::{from_slice, Error};
//!
//! let result = from_slice(&[0x66, 0x6f, 0xff]);
//! assert!(matches!(result, Err(Error::Utf8(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every failure the crate can report.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input was not valid UTF-8
    #[error("Invalid UTF-8 input: {0}")]
    Utf8(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loc2yaml::Error;
    ///
    /// let err = Error::io("permission denied");
    /// assert_eq!(err.to_string(), "IO error: permission denied");
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an encoding error for input that is not UTF-8.
    pub fn utf8<T: fmt::Display>(msg: T) -> Self {
        Error::Utf8(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::utf8(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
