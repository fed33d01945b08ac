//! Adjacency entries and edges.

use std::fmt;

use serde::Serialize;

/// One entry in a vertex's adjacency record.
///
/// The variant is chosen per edge at insertion time: `Plain` when no weight
/// was supplied, `Weighted` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Adjacency<V, W = f64> {
    /// Bare neighbor.
    Plain(V),
    /// Neighbor together with the edge weight.
    Weighted(V, W),
}

impl<V, W> Adjacency<V, W> {
    /// Build an entry, weighted when `weight` is present.
    pub fn new(neighbor: V, weight: Option<W>) -> Self {
        match weight {
            Some(w) => Self::Weighted(neighbor, w),
            None => Self::Plain(neighbor),
        }
    }

    /// The vertex this entry points to.
    pub fn neighbor(&self) -> &V {
        match self {
            Self::Plain(v) | Self::Weighted(v, _) => v,
        }
    }

    /// The edge weight, if this entry carries one.
    pub fn weight(&self) -> Option<&W> {
        match self {
            Self::Plain(_) => None,
            Self::Weighted(_, w) => Some(w),
        }
    }

    /// Whether this entry carries a weight.
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::Weighted(..))
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for Adjacency<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(v) => write!(f, "{}", v),
            Self::Weighted(v, w) => write!(f, "({}, {})", v, w),
        }
    }
}

/// An edge as produced by graph enumeration.
///
/// `weight` is `None` for edges stored without a weight, which makes this
/// the 2-tuple form; otherwise it is the 3-tuple form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<V, W = f64> {
    /// Origin vertex.
    pub source: V,
    /// Destination vertex.
    pub target: V,
    /// Weight, present only for weighted edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<W>,
}

impl<V, W> Edge<V, W> {
    /// Create an unweighted edge.
    pub fn plain(source: V, target: V) -> Self {
        Self {
            source,
            target,
            weight: None,
        }
    }

    /// Create a weighted edge.
    pub fn weighted(source: V, target: V, weight: W) -> Self {
        Self {
            source,
            target,
            weight: Some(weight),
        }
    }
}

impl<V: PartialEq, W: PartialEq> Edge<V, W> {
    /// Whether `other` connects the same endpoints (in either order) with the
    /// same weight status.
    pub fn same_undirected(&self, other: &Self) -> bool {
        self.weight == other.weight
            && ((self.source == other.source && self.target == other.target)
                || (self.source == other.target && self.target == other.source))
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.weight {
            Some(w) => write!(f, "({}, {}, {})", self.source, self.target, w),
            None => write!(f, "({}, {})", self.source, self.target),
        }
    }
}
