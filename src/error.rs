//! Error types for the unxopp library.

use std::io;
use thiserror::Error;

/// Result type alias for unxopp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a Xournal++ document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input file or decompressing it.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with a gzip header.
    #[error("Unknown file format: not a gzip-compressed .xopp file")]
    UnknownFormat,

    /// The decompressed content is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error tokenizing or assembling the XML tree.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// The document contains no page element.
    #[error("no pages")]
    NoPages,

    /// An item is missing an attribute it cannot be rendered without.
    #[error("<{tag}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Item tag name.
        tag: String,
        /// Missing attribute key.
        attribute: String,
    },

    /// An attribute that should hold a number could not be parsed.
    #[error("invalid number in <{tag}> attribute '{attribute}': {value}")]
    InvalidNumber {
        /// Item tag name.
        tag: String,
        /// Attribute key.
        attribute: String,
        /// The offending value.
        value: String,
    },

    /// Error during rendering (TikZ, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<xmlparser::Error> for Error {
    fn from(err: xmlparser::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoPages;
        assert_eq!(err.to_string(), "no pages");

        let err = Error::MissingAttribute {
            tag: "stroke".to_string(),
            attribute: "tool".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "<stroke> is missing required attribute 'tool'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
