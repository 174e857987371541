//! Complete graph with edges labeled by agree-sets.
//!
//! An [`AgreeSetGraph`] over `n` nodes is a candidate Armstrong relation in the making:
//! node `i` is tuple `i`, and the label of edge `(a, b)` is the set of attributes on which
//! tuples `a` and `b` agree. Alongside the labels the graph keeps one [`Partition`] per
//! attribute, and maintains the invariant
//!
//! ```text
//! partition[att].same(a, b)  <=>  att ∈ label(a, b)
//! ```
//!
//! at every point between operations. Agreement on an attribute is transitive, so the
//! nodes sharing it must form cliques.
//!
//! # Assignment and propagation
//!
//! [`assign`][AgreeSetGraph::assign] fixes a generator on an edge. The new attributes merge
//! partition components, which forces the attribute onto every edge between the merged
//! components (closing "near-cycles"). Each edge extended this way is then closed under the
//! closure operator, which may add further attributes and trigger further merges, until a
//! fixpoint is reached. Assignment fails when propagation would extend an edge that already
//! holds an assigned generator, or when an edge's closure collapses to the full schema.
//!
//! A failed assignment leaves the graph partially updated. Graphs have value semantics, so
//! the search clones before every attempt and drops the clone on failure:
//!
//! ```
//! use armstrong_rs::attribute::AttributeSet;
//! use armstrong_rs::closure::GenClosure;
//! use armstrong_rs::graph::AgreeSetGraph;
//!
//! let gens: Vec<AttributeSet> = ["011", "110"].iter().map(|s| s.parse().unwrap()).collect();
//! let closure = GenClosure::new(3, gens.clone());
//!
//! let mut g = AgreeSetGraph::new(3, 3);
//! assert!(g.assign(0, 1, &gens[0], &closure));
//!
//! let mut attempt = g.clone();
//! assert!(attempt.assign(0, 2, &gens[1], &closure));
//! // Tuples 1 and 2 both agree with tuple 0 on attribute 1, hence with each other:
//! assert_eq!(attempt.at(1, 2).to_string(), "010");
//! assert!(g.at(1, 2).is_empty());
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::trace;

use crate::attribute::AttributeSet;
use crate::closure::Closure;
use crate::partition::Partition;
use crate::table::Relation;
use crate::types::{Edge, NodeClass};
use crate::utils::edge_count;

#[derive(Debug, Clone, PartialEq, Eq)]
struct EdgeData {
    att_set: AttributeSet,
    /// Does the edge hold an assigned generator (as opposed to propagated attributes)?
    assigned: bool,
}

/// Labeled clique over a fixed number of nodes and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreeSetGraph {
    nodes: usize,
    width: usize,
    /// Edge records, indexed by [`Edge::index`].
    edges: Vec<EdgeData>,
    /// Connected components of each attribute's agreement graph.
    partitions: Vec<Partition>,
    classes: Vec<NodeClass>,
    symmetry_pruning: bool,
}

impl AgreeSetGraph {
    /// Creates a graph with all edges empty and unassigned, and all partitions singleton.
    ///
    /// Symmetry pruning is enabled.
    pub fn new(nodes: usize, width: usize) -> Self {
        let edges = vec![
            EdgeData {
                att_set: AttributeSet::new(width),
                assigned: false,
            };
            edge_count(nodes)
        ];
        Self {
            nodes,
            width,
            edges,
            partitions: vec![Partition::singletons(nodes); width],
            classes: vec![NodeClass::Isolated; nodes],
            symmetry_pruning: true,
        }
    }

    /// Enables or disables symmetry pruning in [`can_assign`][Self::can_assign].
    pub fn with_symmetry_pruning(mut self, enabled: bool) -> Self {
        self.symmetry_pruning = enabled;
        self
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Schema width `k`.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn symmetry_pruning(&self) -> bool {
        self.symmetry_pruning
    }

    fn check_nodes(&self, a: usize, b: usize) {
        assert!(
            a < self.nodes && b < self.nodes,
            "Node ({}, {}) out of range for {} nodes",
            a,
            b,
            self.nodes
        );
    }

    /// Current label of edge `(a, b)`.
    pub fn at(&self, a: usize, b: usize) -> &AttributeSet {
        self.check_nodes(a, b);
        &self.edges[Edge::new(a, b).index()].att_set
    }

    /// Whether edge `(a, b)` holds an assigned generator.
    pub fn is_assigned(&self, a: usize, b: usize) -> bool {
        self.check_nodes(a, b);
        self.edges[Edge::new(a, b).index()].assigned
    }

    pub fn node_class(&self, node: usize) -> NodeClass {
        self.classes[node]
    }

    /// Partition of the nodes for attribute `att`.
    pub fn partition(&self, att: usize) -> &Partition {
        &self.partitions[att]
    }

    /// All edges in index order, with their labels and assigned flags.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, &AttributeSet, bool)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, data)| (Edge::from_index(i), &data.att_set, data.assigned))
    }

    /// Adds `common` to every edge and merges the corresponding partitions into one class.
    ///
    /// Used to make all tuples agree on the attributes shared by every generator, so that
    /// edges never touched by an assignment still carry a closed label.
    pub fn seed(&mut self, common: &AttributeSet) {
        assert_eq!(common.width(), self.width, "Seed has width {}, expected {}", common.width(), self.width);
        for data in &mut self.edges {
            data.att_set.union_with(common);
        }
        for att in common {
            self.partitions[att].merge_all();
        }
    }

    /// Returns false if an interchangeable pair of nodes with smaller indices exists.
    ///
    /// Isolated nodes can be permuted freely without changing the graph, so among pairs that
    /// differ only by a relabeling of isolated nodes only the one using the lowest isolated
    /// indices is canonical.
    pub fn is_canonical(&self, a: usize, b: usize) -> bool {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let mut isolated = (0..self.nodes).filter(|&i| self.classes[i] == NodeClass::Isolated);
        match (self.classes[lo], self.classes[hi]) {
            (NodeClass::Touched, NodeClass::Touched) => true,
            (NodeClass::Isolated, NodeClass::Isolated) => {
                isolated.next() == Some(lo) && isolated.next() == Some(hi)
            }
            (NodeClass::Isolated, NodeClass::Touched) => isolated.next() == Some(lo),
            (NodeClass::Touched, NodeClass::Isolated) => isolated.next() == Some(hi),
        }
    }

    /// Quick test whether `target` might be assignable to `(a, b)`.
    ///
    /// The edge must not be assigned yet, its label must be a subset of `target` (labels only
    /// grow), and with symmetry pruning enabled the pair must be canonical.
    pub fn can_assign(&self, a: usize, b: usize, target: &AttributeSet) -> bool {
        self.check_nodes(a, b);
        let data = &self.edges[Edge::new(a, b).index()];
        !data.assigned
            && data.att_set.is_subset(target)
            && (!self.symmetry_pruning || self.is_canonical(a, b))
    }

    /// Tries to assign `target` to edge `(a, b)` and propagate its consequences.
    ///
    /// Returns false if the assignment is impossible. On failure the graph is left in an
    /// inconsistent intermediate state and must be discarded.
    pub fn assign<C>(&mut self, a: usize, b: usize, target: &AttributeSet, closure: &C) -> bool
    where
        C: Closure + ?Sized,
    {
        if !self.can_assign(a, b, target) {
            return false;
        }

        let edge = Edge::new(a, b);
        // Attributes added to edges, with the edge they were added to.
        let mut pending: Vec<(usize, Edge)> = {
            let data = &self.edges[edge.index()];
            target.difference(&data.att_set).map(|att| (att, edge)).collect()
        };
        let data = &mut self.edges[edge.index()];
        data.att_set = target.clone();
        data.assigned = true;

        while !pending.is_empty() {
            // Edges extended in this round, whose labels may no longer be closed.
            let mut open: BTreeSet<Edge> = BTreeSet::new();

            for (att, e) in pending.drain(..) {
                let (x, y) = e.nodes();
                // Components may have been joined already.
                let Some((x_comp, y_comp)) = self.partitions[att].merge(x, y) else {
                    continue;
                };
                trace!("merge on attribute {}: {:?} + {:?}", att, x_comp, y_comp);
                for &p in &x_comp {
                    for &q in &y_comp {
                        let cross = Edge::new(p, q);
                        let data = &mut self.edges[cross.index()];
                        if data.att_set.contains(att) {
                            continue;
                        }
                        if data.assigned {
                            trace!("conflict: assigned edge {} cannot gain attribute {}", cross, att);
                            return false;
                        }
                        data.att_set.insert(att);
                        self.classes[p] = NodeClass::Touched;
                        self.classes[q] = NodeClass::Touched;
                        open.insert(cross);
                    }
                }
            }

            for e in open {
                let data = &mut self.edges[e.index()];
                let cl = closure.closure(&data.att_set);
                // A full closure means a smaller relation realizes the same closure system.
                if cl.is_full() {
                    trace!("collapse: closure of {} on edge {} is the full schema", data.att_set, e);
                    return false;
                }
                let extra: Vec<usize> = cl.difference(&data.att_set).collect();
                if !extra.is_empty() {
                    trace!("closing edge {}: {} -> {}", e, data.att_set, cl);
                }
                for att in extra {
                    data.att_set.insert(att);
                    pending.push((att, e));
                }
            }
        }

        self.classes[a] = NodeClass::Touched;
        self.classes[b] = NodeClass::Touched;
        true
    }

    /// Converts the graph into a tuple table.
    ///
    /// The value of node `i` in column `att` is its component identifier in the partition of
    /// `att`, so two rows agree on a column iff their edge carries that attribute.
    pub fn to_table(&self) -> Relation {
        let rows = (0..self.nodes)
            .map(|node| (0..self.width).map(|att| self.partitions[att].find(node)).collect())
            .collect();
        Relation::new(self.width, rows)
    }
}

impl fmt::Display for AgreeSetGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AgreeSetGraph(nodes = {}, attributes = {}):", self.nodes, self.width)?;
        for (edge, att_set, assigned) in self.edges() {
            writeln!(f, "  {}: {}{}", edge, att_set, if assigned { " *" } else { "" })?;
        }
        Ok(())
    }
}
