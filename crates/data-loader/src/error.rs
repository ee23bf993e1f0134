//! Error types for the data-loader crate.
//!
//! Loading is best-effort per record: a malformed row or JSON element is
//! defaulted or skipped, never reported here. These variants cover failures
//! of a whole input (missing file, unreadable export, nothing parseable).

use thiserror::Error;

/// Errors that can occur while loading a film history
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The input has no line after the header (nothing, or a header without newline)
    #[error("File is empty")]
    EmptyFile,

    /// Every row was rejected
    ///
    /// Carries the detected header cells so the caller can tell the user
    /// which columns were seen.
    #[error("Parsed 0 films. Headers detected: {}", headers.join(", "))]
    NoFilms { headers: Vec<String> },

    /// The JSON document itself could not be parsed
    #[error("Invalid JSON film list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
