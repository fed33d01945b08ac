//! Shared types for the primer-structures library.

pub mod adjacency;
pub mod error;

pub use adjacency::{Adjacency, Edge};
pub use error::{ErrorKind, PrimerError, PrimerResult};

/// Default number of buckets for a new hash table.
pub const DEFAULT_BUCKET_COUNT: usize = 10;
