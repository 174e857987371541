//! Equivalence partition of the nodes for a single attribute.
//!
//! Each node maps to a component identifier; two nodes agree on the attribute iff they
//! share a component. Node counts are small, so merging relabels one side directly
//! instead of keeping union-find parent links. Component identifiers are node indices:
//! a fresh partition puts node `i` into component `i`.

/// A partition of `0..n` into components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    component: Vec<usize>,
}

impl Partition {
    /// Creates the all-singleton partition of `nodes` nodes.
    pub fn singletons(nodes: usize) -> Self {
        Self {
            component: (0..nodes).collect(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.component.len()
    }

    pub fn is_empty(&self) -> bool {
        self.component.is_empty()
    }

    /// Component identifier of `node`.
    #[inline]
    pub fn find(&self, node: usize) -> usize {
        self.component[node]
    }

    /// Returns true if `a` and `b` are in the same component.
    #[inline]
    pub fn same(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Nodes of the component containing `node`, in increasing order.
    pub fn members(&self, node: usize) -> Vec<usize> {
        let c = self.find(node);
        (0..self.len()).filter(|&i| self.component[i] == c).collect()
    }

    /// Merges the components of `a` and `b`.
    ///
    /// Returns the two components as they were before merging, or `None` if `a` and `b`
    /// were already together. The merged component keeps `a`'s identifier.
    pub fn merge(&mut self, a: usize, b: usize) -> Option<(Vec<usize>, Vec<usize>)> {
        if self.same(a, b) {
            return None;
        }
        let a_members = self.members(a);
        let b_members = self.members(b);
        let target = self.find(a);
        for &node in &b_members {
            self.component[node] = target;
        }
        Some((a_members, b_members))
    }

    /// Puts every node into a single component.
    pub fn merge_all(&mut self) {
        if let Some(&first) = self.component.first() {
            self.component.fill(first);
        }
    }

    /// Number of distinct components.
    pub fn num_components(&self) -> usize {
        let mut ids = self.component.clone();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}
