//! Error types for `mdlinspect`

use thiserror::Error;

/// The error type for `mdlinspect` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== MDL Format Errors ====================
    /// The buffer ran out in the middle of a record.
    ///
    /// This is the only way decoding can fail. Corrupt counts in the header
    /// or in a nested group surface here as well.
    #[error(
        "insufficient data reading {record} at offset {offset}: \
         {available} bytes available, {required} required"
    )]
    InsufficientData {
        /// The record being read when the buffer ran out.
        record: &'static str,
        /// Cursor position at the start of the record.
        offset: usize,
        /// Bytes left in the buffer.
        available: usize,
        /// Bytes the record needs.
        required: usize,
    },

    // ==================== Output Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for `mdlinspect` operations.
pub type Result<T> = std::result::Result<T, Error>;
