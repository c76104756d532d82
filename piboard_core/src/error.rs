//! Unified error handling for piboard
//!
//! Decoding and scanning never fail: malformed input degrades to default
//! field values. Errors only surface at the edges, when a line source cannot
//! be read or when a caller hands us text that must be a revision code.

use thiserror::Error;

/// Main error type for piboard operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// The system information source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Text that should have been a number was not
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization errors (JSON report output)
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results using BoardError
pub type BoardResult<T> = std::result::Result<T, BoardError>;

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::Serialization(err.to_string())
    }
}
