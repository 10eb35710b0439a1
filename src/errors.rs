/*!
 * Error types for the audioref application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while loading a single level-container document.
///
/// These are all per-document: the offending document is recorded and
/// skipped, and the batch continues with the remaining documents.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The named document does not exist
    #[error("Document not found: {0}")]
    Missing(String),

    /// The document exists but has no content (zero bytes or whitespace only)
    #[error("Document is empty: {0}")]
    Empty(String),

    /// The document content is not valid JSON
    #[error("Failed to parse document {resource}: {message}")]
    Parse {
        /// Name of the document that failed to parse
        resource: String,
        /// Parser error message
        message: String,
    },

    /// The document parses but lacks the expected `levels` shape
    #[error("Document has no usable levels structure: {0}")]
    Structural(String),
}

/// Errors that can occur when persisting the candidate filter output.
///
/// Unlike read-side errors these are terminal for the run: a failed
/// output write must not look like a skipped input.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Writing the output resource failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from document loading
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from writing filter output
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
