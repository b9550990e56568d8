//! Unified error types for colladoc.
//!
//! Parse, I/O, schema, and encoding failures all surface through a single
//! error type. Negative answers to user input (an unknown unit name, an
//! unrecognized axis token) are not errors and are reported as `Ok(false)`.
use thiserror::Error;

/// Main error type for colladoc operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not well-formed XML or cannot be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required element or attribute is missing from the document
    #[error("Schema error: {0}")]
    Schema(String),

    /// Output cannot be represented in the requested encoding
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl Error {
    /// Build a schema error for a missing element path.
    pub(crate) fn missing_element(path: &str) -> Self {
        Error::Schema(format!("required element '{}' is missing", path))
    }

    /// Build a schema error for a missing attribute on an element path.
    pub(crate) fn missing_attribute(path: &str, attr: &str) -> Self {
        Error::Schema(format!(
            "required attribute '{}' is missing on '{}'",
            attr, path
        ))
    }
}

/// Result type for colladoc operations.
pub type Result<T> = std::result::Result<T, Error>;
