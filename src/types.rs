//! Type-safe wrappers for agree-set graph edges and node classes.
use std::fmt;

use crate::utils::{pairing_triangular, unpairing_triangular};

/// An unordered pair of distinct nodes, identified by its pairing-function index.
///
/// The index is independent of the node count: `Edge::new(0, 1)` is edge 0 in every graph.
///
/// # Invariants
///
/// - `Edge::new(a, b) == Edge::new(b, a)`
/// - `Edge::new(a, b).nodes() == (min(a, b), max(a, b))`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edge(usize);

impl Edge {
    /// Creates the edge between two distinct nodes, in either order.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn new(a: usize, b: usize) -> Self {
        assert_ne!(a, b, "Edge endpoints must be distinct");
        if a < b {
            Edge(pairing_triangular(a, b))
        } else {
            Edge(pairing_triangular(b, a))
        }
    }

    /// Creates an edge from its raw index.
    pub fn from_index(index: usize) -> Self {
        Edge(index)
    }

    /// Returns the raw edge index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the endpoints `(a, b)` with `a < b`.
    pub fn nodes(self) -> (usize, usize) {
        unpairing_triangular(self.0)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.nodes();
        write!(f, "({}, {})", a, b)
    }
}

impl From<Edge> for usize {
    fn from(edge: Edge) -> Self {
        edge.0
    }
}

/// Symmetry class of a node, used only to prune isomorphic branches.
///
/// All `Isolated` nodes are interchangeable: no assignment or propagation has touched
/// any of their edges, so relabeling them yields the same graph.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum NodeClass {
    /// Not yet distinguished from other isolated nodes.
    #[default]
    Isolated,
    /// Endpoint of an assigned or propagated edge.
    Touched,
}
