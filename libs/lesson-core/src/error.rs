//! Error types for lesson-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a vocabulary export.
///
/// Every variant carries the 1-based line number and the raw offending
/// line so the source file can be corrected.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected single field on line {line}, saw: {text}")]
    UnexpectedToken { line: usize, text: String },

    #[error("word pair before any date on line {line}, saw: {text}")]
    PairBeforeDate { line: usize, text: String },

    #[error("no recognized separator on line {line}, saw: {text}")]
    NoSeparator { line: usize, text: String },
}

/// Errors from the end-to-end file conversion path.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
