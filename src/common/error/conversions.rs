//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert errors raised by
//! the XML backend into the unified Error type.

use super::types::Error;

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Parse(format!("Invalid attribute: {}", err))
    }
}

impl From<quick_xml::escape::EscapeError> for Error {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        Error::Parse(format!("Invalid escape sequence: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_error_maps_to_parse() {
        let err = quick_xml::escape::unescape("&bogus;").unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_io_error_maps_to_io() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
