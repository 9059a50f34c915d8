//! Error types for the styledown library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for styledown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during document processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document does not exist on disk.
    #[error("document not found: {0}")]
    FileNotFound(PathBuf),

    /// The document could not be decoded by the DOCX reader.
    #[error("DOCX parse error: {0}")]
    DocxParse(String),

    /// A "Heading"-prefixed style name without a usable trailing level digit.
    #[error("cannot derive a heading level from style {0:?}: expected a trailing digit 1-9")]
    InvalidHeadingStyle(String),
}

impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::DocxParse(err.to_string())
    }
}
