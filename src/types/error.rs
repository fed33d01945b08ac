//! Error types for the primer-structures library.

use thiserror::Error;

/// Broad classification of a [`PrimerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required key, index or element was absent.
    LookupMiss,
    /// An argument was rejected before any mutation took place.
    InvalidArgument,
}

/// All errors that can occur in the primer-structures library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimerError {
    /// Index does not address an existing element.
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Key not present in a hash table.
    #[error("Key {0} not found")]
    KeyNotFound(String),

    /// Boundary operation on an empty container.
    #[error("{0} is empty")]
    Empty(&'static str),

    /// Insert position outside `0..=len`.
    #[error("Insert position {index} out of range for length {len}")]
    InvalidPosition { index: usize, len: usize },

    /// A hash table needs at least one bucket.
    #[error("Invalid bucket count: {0}")]
    InvalidBucketCount(usize),
}

impl PrimerError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfBounds { .. } | Self::KeyNotFound(_) | Self::Empty(_) => {
                ErrorKind::LookupMiss
            }
            Self::InvalidPosition { .. } | Self::InvalidBucketCount(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Convenience result type for primer-structures operations.
pub type PrimerResult<T> = Result<T, PrimerError>;
