//! Error types for the docoutline library.
//!
//! The grouping and labeling core is total and never returns these; they
//! only surface from the I/O helpers in [`crate::io`].

use std::io;
use thiserror::Error;

/// Result type alias for docoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading line records or writing outlines.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON or does not have the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parsed but cannot be used (e.g. not an array of records).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error while rendering the outline.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("expected an array".to_string());
        assert_eq!(err.to_string(), "Invalid input: expected an array");

        let err = Error::Render("oops".to_string());
        assert_eq!(err.to_string(), "Rendering error: oops");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
