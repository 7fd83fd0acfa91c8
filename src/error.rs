//! # Error Handling
//!
//! This module defines the error type shared by the `template-graph` library.
//! It uses the `thiserror` library to build a single `Error` enum with
//! descriptive messages.
//!
//! The scanning pipeline itself is best-effort and never fails: unreadable
//! files, undecodable text and unresolvable targets are absorbed where they
//! occur. Errors are only produced at the edges:
//!
//! - Loading and parsing the settings file.
//! - Compiling the directive patterns.
//!
//! The `Result` type alias is used to return `Result<T, Error>` from
//! functions, making it easy to propagate failures with `?`.

use thiserror::Error;

/// Main error type for template-graph operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while interpreting the settings file.
    ///
    /// This error includes the specific issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
