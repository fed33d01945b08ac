//! Fluent API for building Graph instances.

use std::hash::Hash;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
pub struct GraphBuilder<V, W = f64> {
    graph: Graph<V, W>,
}

impl<V, W> GraphBuilder<V, W>
where
    V: Clone + Eq + Hash,
    W: Clone + PartialEq,
{
    /// Create a builder for an undirected graph.
    pub fn undirected() -> Self {
        Self {
            graph: Graph::undirected(),
        }
    }

    /// Create a builder for a directed graph.
    pub fn directed() -> Self {
        Self {
            graph: Graph::directed(),
        }
    }

    /// Add an isolated vertex.
    pub fn vertex(mut self, v: V) -> Self {
        self.graph.add_vertex(v);
        self
    }

    /// Add several vertices, in order.
    pub fn vertices<I: IntoIterator<Item = V>>(mut self, vs: I) -> Self {
        for v in vs {
            self.graph.add_vertex(v);
        }
        self
    }

    /// Add an unweighted edge.
    pub fn edge(mut self, v1: V, v2: V) -> Self {
        self.graph.add_edge(v1, v2, None);
        self
    }

    /// Add a weighted edge.
    pub fn weighted_edge(mut self, v1: V, v2: V, weight: W) -> Self {
        self.graph.add_edge(v1, v2, Some(weight));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<V, W> {
        self.graph
    }
}
