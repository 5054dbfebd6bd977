//! Content classification error types

use thiserror::Error;

/// Why a piece of content could not be classified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Content is empty")]
    Empty,

    #[error("Unsupported content value: {0}")]
    Unsupported(&'static str),
}

/// Result type alias for content parsing
pub type ParseResult<T> = Result<T, ParseError>;
