//! Error types for store operations.

use thiserror::Error;

/// Errors produced by configuration store operations.
///
/// An absent value is not an error: `read` returns `Ok(None)` so the
/// aggregator can fall through to the next store in its chain.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key matched more than one node where a single value was expected.
    ///
    /// This is a usage error (the caller asked for a scalar on a collection
    /// path), not an absence. Append the length marker or a positional index
    /// to address the collection.
    #[error("key '{key}' resolves to {matches} elements where a single value was expected")]
    AmbiguousKey { key: String, matches: usize },

    /// The store does not support writes.
    #[error("write is not supported by the '{store}' store")]
    WriteUnsupported { store: String },

    /// The backing document is malformed and could not be parsed.
    #[error("invalid document: {reason}")]
    InvalidDocument { reason: String },

    /// I/O error from the underlying source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
