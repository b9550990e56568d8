/// Configuration types for writing COLLADA documents.
///
/// This module defines the options that control how a document is laid out
/// and encoded when it is serialized.
use chrono::{DateTime, FixedOffset};

/// Whitespace pass applied to the tree before it is serialized.
///
/// The passes are alternatives; a write applies exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// One element per line, nested elements indented
    #[default]
    Indent,
    /// Surrounding whitespace stripped from every text node
    Flatten,
}

/// Configuration options for writing a document.
///
/// # Examples
///
/// ```rust
/// use colladoc::{WriteOptions, Whitespace};
///
/// // Create with defaults
/// let options = WriteOptions::default();
///
/// // Or customize
/// let options = WriteOptions::new()
///     .with_encoding("ISO-8859-1")
///     .with_whitespace(Whitespace::Flatten);
/// ```
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Encoding label of the output, also written to the XML declaration
    pub encoding: String,
    /// Whitespace pass to apply
    pub whitespace: Whitespace,
    /// String inserted once per nesting level by [`Whitespace::Indent`]
    pub indent_unit: String,
    /// Whether to write an XML declaration
    pub xml_declaration: bool,
    /// Time stamped into `created`/`modified`; the current time when unset
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            encoding: "UTF-8".to_string(),
            whitespace: Whitespace::Indent,
            indent_unit: "\t".to_string(),
            xml_declaration: true,
            timestamp: None,
        }
    }
}

impl WriteOptions {
    /// Create a new `WriteOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output encoding label.
    ///
    /// Labels follow the WHATWG Encoding Standard (`"UTF-8"`, `"UTF-16LE"`,
    /// `"windows-1252"`, ...). An unknown label fails the write.
    #[inline]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Select the whitespace pass.
    #[inline]
    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Shorthand for choosing between [`Whitespace::Indent`] and
    /// [`Whitespace::Flatten`].
    #[inline]
    pub fn with_indent(self, indent: bool) -> Self {
        self.with_whitespace(if indent {
            Whitespace::Indent
        } else {
            Whitespace::Flatten
        })
    }

    /// Set the indentation unit.
    ///
    /// Only applies with [`Whitespace::Indent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use colladoc::WriteOptions;
    ///
    /// let options = WriteOptions::new().with_indent_unit("  ");
    /// ```
    #[inline]
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Set whether the XML declaration is written.
    #[inline]
    pub fn with_xml_declaration(mut self, include: bool) -> Self {
        self.xml_declaration = include;
        self
    }

    /// Stamp a fixed time instead of the current one.
    #[inline]
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
