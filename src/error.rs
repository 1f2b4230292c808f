//! Error types for the tierspell library.
//!
//! The correction core never fails: "no match" and degenerate scoring cases
//! resolve into empty results. Errors only arise at the edges, while loading
//! corpora, reading configuration files or parsing command line input. All of
//! them are represented by the [`SpellError`] enum.
//!
//! # Examples
//!
//! ```
//! use tierspell::error::{SpellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tierspell operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// I/O errors (reading corpora, writing frequency files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (malformed frequency lines, bad tokens, etc.)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid caller input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SpellError.
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SpellError::Corpus(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpellError::corpus("line 3: missing count");
        assert_eq!(error.to_string(), "Corpus error: line 3: missing count");

        let error = SpellError::invalid_config("max_results must be positive");
        assert_eq!(
            error.to_string(),
            "Config error: max_results must be positive"
        );

        let error = SpellError::invalid_argument("'c4t' is not a word");
        assert_eq!(error.to_string(), "Invalid argument: 'c4t' is not a word");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let spell_error = SpellError::from(io_error);

        match spell_error {
            SpellError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let spell_error = SpellError::from(json_error);

        assert!(matches!(spell_error, SpellError::Json(_)));
        assert!(spell_error.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_every_variant_has_a_prefix() {
        fn prefix(error: &SpellError) -> &'static str {
            match error {
                SpellError::Io(_) => "I/O error: ",
                SpellError::Corpus(_) => "Corpus error: ",
                SpellError::Config(_) => "Config error: ",
                SpellError::InvalidArgument(_) => "Invalid argument: ",
                SpellError::Json(_) => "JSON error: ",
            }
        }

        let errors = [
            SpellError::from(io::Error::other("disk")),
            SpellError::corpus("bad line"),
            SpellError::invalid_config("bad value"),
            SpellError::invalid_argument("bad word"),
        ];
        for error in &errors {
            assert!(error.to_string().starts_with(prefix(error)));
        }
    }
}
