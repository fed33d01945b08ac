//! primer-structures: foundational in-memory data structures.
//!
//! The centerpiece is an adjacency-list [`Graph`] supporting directed and
//! undirected edges, weighted or not. Alongside it sit a dynamic [`Array`],
//! a separate-chaining [`HashTable`], a singly [`LinkedList`] and two stack
//! variants. All share one error type, [`PrimerError`].

pub mod cli;
pub mod graph;
pub mod hash;
pub mod sequence;
pub mod stack;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use hash::HashTable;
pub use sequence::{Array, LinkedList};
pub use stack::{ArrayStack, LinkedStack};
pub use types::{
    Adjacency, Edge, ErrorKind, PrimerError, PrimerResult, DEFAULT_BUCKET_COUNT,
};
