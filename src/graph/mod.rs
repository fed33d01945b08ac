//! Adjacency-list graph, the core structure.

pub mod adjacency_graph;
pub mod builder;

pub use adjacency_graph::Graph;
pub use builder::GraphBuilder;
