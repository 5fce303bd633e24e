//! Error types shared across the crate.

use thiserror::Error;

/// Error type for change-making operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller supplied a malformed denomination table.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for change-making operations.
pub type Result<T> = std::result::Result<T, Error>;
