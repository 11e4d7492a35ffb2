use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while rendering or truncating a value
#[derive(Debug, Error)]
pub enum Error {
    /// The value's own formatting impl reported an error
    #[error("failed to produce representation: {0}")]
    Representation(#[from] std::fmt::Error),

    #[error("failed to serialize value as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid limit {0}: must be zero or greater")]
    InvalidLimit(i64),

    #[error("'{0}' is not a valid limit (expected an integer)")]
    InvalidNumber(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid JSON: {source}")]
    InvalidJson {
        line: usize,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
