//! Error types for the Tino library.
//!
//! All fallible operations return [`TinoError`] through the [`Result`]
//! alias. The classification core itself is total and never fails; errors
//! arise only from catalog loading and validation and from CLI I/O.
//!
//! # Examples
//!
//! ```
//! use tino::error::{TinoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TinoError::catalog("intent names must be unique"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Tino operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the string-payload
/// variants.
#[derive(Error, Debug)]
pub enum TinoError {
    /// I/O errors (catalog files, CLI input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog shape or validation errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TinoError.
pub type Result<T> = std::result::Result<T, TinoError>;

impl TinoError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        TinoError::Catalog(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TinoError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TinoError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TinoError::catalog("Test catalog error");
        assert_eq!(error.to_string(), "Catalog error: Test catalog error");

        let error = TinoError::invalid_argument("bad threshold");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad threshold");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let tino_error = TinoError::from(io_error);

        match tino_error {
            TinoError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
