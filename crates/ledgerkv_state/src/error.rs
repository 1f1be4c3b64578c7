//! Error types for state operations.

use std::io;
use thiserror::Error;

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur while reading or writing ledger state.
#[derive(Debug, Error)]
pub enum StateError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A state snapshot could not be encoded or decoded.
    #[error("snapshot encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The key is not acceptable to the ledger.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The persisted state is corrupted.
    #[error("state corrupted: {0}")]
    Corrupted(String),

    /// The ledger could not serve the request.
    #[error("state unavailable: {0}")]
    Unavailable(String),
}
