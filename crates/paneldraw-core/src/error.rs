//! Error handling for PanelDraw.
//!
//! The editor has exactly one recoverable failure surface: the layout
//! configuration file. Other invalid input (non-numeric fields,
//! undersized canvas dimensions) is rejected silently without an error.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout file error type
///
/// Represents failures while importing or exporting the JSON
/// configuration document. Import is atomic: any of these errors means
/// the editor state was left untouched.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The file content is not valid JSON or not a layout document
    #[error("invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but violates a structural requirement
    #[error("invalid layout: {reason}")]
    Invalid {
        /// What requirement the document violates.
        reason: String,
    },

    /// The file could not be read or written
    #[error("layout file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error type aggregating all error categories
#[derive(Error, Debug)]
pub enum Error {
    /// Layout file error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with a message
    #[error("{0}")]
    Other(String),
}

/// Convenience result alias using the top-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
