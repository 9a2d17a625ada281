//! Configuration options for YAML emission.
//!
//! [`EmitOptions`] controls the width of one indentation level. The default
//! of two spaces is what every consumer of the converter expects; the width is
//! only exposed for callers that post-process the output with tooling that
//! wants something else.
//!
//! ## Examples
//!
//! ```rust
//! use loc2yaml::{from_str, to_string_with_options, EmitOptions};
//!
//! let result = from_str("l_english:\nfoo: \"bar\"");
//!
//! let yaml = to_string_with_options(&result, EmitOptions::new().with_indent(4));
//! assert_eq!(yaml, "l_english:\n    foo: \"bar\"");
//! ```

/// Configuration options for YAML serialization.
///
/// # Examples
///
/// ```rust
/// use loc2yaml::EmitOptions;
///
/// let options = EmitOptions::new();
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.unit(), "  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions { indent: 2 }
    }
}

impl EmitOptions {
    /// Creates default options (2-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loc2yaml::EmitOptions;
    ///
    /// let options = EmitOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Returns one indentation level as a string of spaces.
    #[must_use]
    pub fn unit(&self) -> String {
        " ".repeat(self.indent)
    }
}
