//! Error types for whence operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhenceError {
    #[error("Invalid phrase: {0}")]
    InvalidPhrase(String),

    #[error("Offset out of range: {0}")]
    OutOfRange(String),

    #[error("Ambiguous local time: {0}")]
    AmbiguousLocalTime(String),
}

pub type Result<T> = std::result::Result<T, WhenceError>;
