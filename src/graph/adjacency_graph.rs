//! Adjacency-list graph with vertices keyed by value and edges stored per source.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::types::{Adjacency, Edge};

/// A directed or undirected graph stored as adjacency lists.
///
/// Each vertex maps to an ordered record of [`Adjacency`] entries. Entries
/// are weighted or plain per edge, depending on whether a weight was given
/// to [`Graph::add_edge`]. For undirected graphs every stored edge `u -> v`
/// has a reciprocal `v -> u` with the same weight status.
///
/// Vertices are enumerated in insertion order.
#[derive(Debug, Clone)]
pub struct Graph<V, W = f64> {
    /// Vertex keys in insertion order.
    vertices: Vec<V>,
    /// Adjacency records, keyed by vertex.
    adjacency: HashMap<V, Vec<Adjacency<V, W>>>,
    /// Fixed at construction.
    directed: bool,
}

impl<V, W> Graph<V, W> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
            directed,
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex keys, in insertion order.
    pub fn get_vertices(&self) -> &[V] {
        &self.vertices
    }
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash,
    W: Clone + PartialEq,
{
    /// Add a vertex with an empty adjacency record. No-op if present.
    pub fn add_vertex(&mut self, v: V) {
        if !self.adjacency.contains_key(&v) {
            self.vertices.push(v.clone());
            self.adjacency.insert(v, Vec::new());
        }
    }

    /// Add an edge from `v1` to `v2`, creating either vertex if needed.
    ///
    /// With a weight, an existing entry for the same neighbor has its weight
    /// replaced rather than a second entry appended. Without a weight, the
    /// edge is only added if `v2` is not already a neighbor of `v1`.
    /// Undirected graphs mirror the operation on `v2`'s record.
    pub fn add_edge(&mut self, v1: V, v2: V, weight: Option<W>) {
        self.add_vertex(v1.clone());
        self.add_vertex(v2.clone());

        let existed = self.link(&v1, Adjacency::new(v2.clone(), weight.clone()));
        if self.directed {
            return;
        }

        if v1 == v2 {
            // An undirected loop is stored twice in its own record; `link`
            // already updated both copies if the loop existed.
            if !existed {
                if let Some(list) = self.adjacency.get_mut(&v1) {
                    list.push(Adjacency::new(v2, weight));
                }
            }
        } else {
            self.link(&v2, Adjacency::new(v1, weight));
        }
    }

    /// Adjacency record of `v`, empty if `v` is not in the graph.
    pub fn get_neighbors<Q>(&self, v: &Q) -> &[Adjacency<V, W>]
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency
            .get(v)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Remove the edge `v1 -> v2` (and its reciprocal when undirected).
    ///
    /// Returns false if either vertex is absent or no such edge exists.
    pub fn remove_edge<Q>(&mut self, v1: &Q, v2: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.adjacency.contains_key(v2) {
            return false;
        }
        let removed = match self.adjacency.get_mut(v1) {
            Some(list) => unlink(list, v2),
            None => false,
        };
        if removed && !self.directed {
            if let Some(list) = self.adjacency.get_mut(v2) {
                unlink(list, v1);
            }
        }
        removed
    }

    /// Remove `v` and every adjacency entry that references it.
    ///
    /// Returns false if `v` was not in the graph.
    pub fn remove_vertex<Q>(&mut self, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.adjacency.remove(v).is_none() {
            return false;
        }
        self.vertices.retain(|x| x.borrow() != v);

        let mut stripped = 0;
        for list in self.adjacency.values_mut() {
            let before = list.len();
            list.retain(|entry| entry.neighbor().borrow() != v);
            stripped += before - list.len();
        }
        log::debug!(
            "Removed vertex and {} adjacency entries referencing it",
            stripped
        );
        true
    }

    /// Distinct edges of the graph.
    ///
    /// Directed graphs yield every stored entry. Undirected graphs yield each
    /// pair once, oriented from whichever endpoint is enumerated first.
    pub fn get_edges(&self) -> Vec<Edge<V, W>> {
        let mut edges: Vec<Edge<V, W>> = Vec::new();
        for source in &self.vertices {
            for entry in self.get_neighbors(source) {
                let edge = Edge {
                    source: source.clone(),
                    target: entry.neighbor().clone(),
                    weight: entry.weight().cloned(),
                };
                if self.directed || !edges.iter().any(|e| e.same_undirected(&edge)) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    /// Number of distinct edges, counted as [`Graph::get_edges`] does.
    pub fn edge_count(&self) -> usize {
        self.get_edges().len()
    }

    /// Whether `v` is a vertex of the graph.
    pub fn contains_vertex<Q>(&self, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(v)
    }

    /// Whether `v2` appears in `v1`'s adjacency record.
    pub fn has_edge<Q>(&self, v1: &Q, v2: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_neighbors(v1)
            .iter()
            .any(|entry| entry.neighbor().borrow() == v2)
    }

    /// Length of `v`'s adjacency record (0 if absent).
    pub fn degree<Q>(&self, v: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_neighbors(v).len()
    }

    /// Representation of `v`'s record, judged by its first entry.
    ///
    /// `None` when `v` is absent or has no neighbors.
    pub fn is_weighted<Q>(&self, v: &Q) -> Option<bool>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_neighbors(v).first().map(Adjacency::is_weighted)
    }

    /// Insert or update `entry` in `vertex`'s record.
    ///
    /// Returns true if the neighbor was already present.
    fn link(&mut self, vertex: &V, entry: Adjacency<V, W>) -> bool {
        let Some(list) = self.adjacency.get_mut(vertex) else {
            return false;
        };

        if let Some(first) = list.first() {
            if first.is_weighted() != entry.is_weighted() {
                log::warn!("Mixing weighted and unweighted edges in one adjacency record");
            }
        }

        let mut found = false;
        for existing in list
            .iter_mut()
            .filter(|existing| existing.neighbor() == entry.neighbor())
        {
            found = true;
            if entry.is_weighted() {
                *existing = entry.clone();
            }
        }

        if !found {
            list.push(entry);
        } else if entry.is_weighted() {
            log::debug!("Updated weight of an existing edge");
        }
        found
    }
}

/// Remove the first entry pointing at `neighbor`.
fn unlink<V, W, Q>(list: &mut Vec<Adjacency<V, W>>, neighbor: &Q) -> bool
where
    V: Borrow<Q>,
    Q: Eq + ?Sized,
{
    match list
        .iter()
        .position(|entry| entry.neighbor().borrow() == neighbor)
    {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V, W> fmt::Display for Graph<V, W>
where
    V: fmt::Display + Eq + Hash,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: [", v)?;
            if let Some(list) = self.adjacency.get(v) {
                for (j, entry) in list.iter().enumerate() {
                    if j > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", entry)?;
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
