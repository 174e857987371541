//! Debug utilities for inspecting agree-set graphs.
//!
//! These are primarily useful in tests and during development. The search driver runs
//! [`AgreeSetGraph::validate`] after every successful assignment in debug builds.

use std::fmt::Write;

use crate::closure::Closure;
use crate::error::InvariantViolation;
use crate::graph::AgreeSetGraph;
use crate::types::Edge;

impl AgreeSetGraph {
    /// Checks the partition invariant: for every attribute and node pair, "same component"
    /// must equal "edge carries the attribute".
    ///
    /// A violation is a propagation bug, never a search outcome.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for att in 0..self.width() {
            let partition = self.partition(att);
            for b in 1..self.num_nodes() {
                for a in 0..b {
                    let same_component = partition.same(a, b);
                    let carries = self.at(a, b).contains(att);
                    if same_component != carries {
                        return Err(InvariantViolation {
                            attribute: att,
                            a,
                            b,
                            same_component,
                            carries,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Dump complete graph state for debugging.
    pub fn dump_state(&self) -> String {
        let mut result = String::new();

        writeln!(&mut result, "=== AgreeSetGraph State ===").unwrap();
        writeln!(
            &mut result,
            "Nodes: {}, attributes: {}, symmetry pruning: {}",
            self.num_nodes(),
            self.width(),
            self.symmetry_pruning()
        )
        .unwrap();

        writeln!(&mut result, "Edges:").unwrap();
        for (edge, att_set, assigned) in self.edges() {
            writeln!(&mut result, "  {} {} {}", edge, att_set, if assigned { "assigned" } else { "" }).unwrap();
        }

        writeln!(&mut result, "Partitions:").unwrap();
        for att in 0..self.width() {
            let partition = self.partition(att);
            let comps: Vec<String> = (0..self.num_nodes())
                .map(|node| partition.find(node).to_string())
                .collect();
            writeln!(&mut result, "  att {}: [{}]", att, comps.join(" ")).unwrap();
        }

        writeln!(&mut result, "Node classes:").unwrap();
        for node in 0..self.num_nodes() {
            writeln!(&mut result, "  {}: {:?}", node, self.node_class(node)).unwrap();
        }

        result
    }

    /// Number of edges holding an assigned generator.
    pub fn num_assigned(&self) -> usize {
        self.edges().filter(|&(_, _, assigned)| assigned).count()
    }

    /// Edges whose label is not closed under `closure`.
    pub fn unclosed_edges<C>(&self, closure: &C) -> Vec<Edge>
    where
        C: Closure + ?Sized,
    {
        self.edges()
            .filter(|(_, att_set, _)| closure.closure(att_set) != **att_set)
            .map(|(edge, _, _)| edge)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeSet;
    use crate::closure::GenClosure;

    fn sets(bits: &[&str]) -> Vec<AttributeSet> {
        bits.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_validate_after_assignments() {
        let gens = sets(&["1011", "1110", "1000"]);
        let closure = GenClosure::new(4, gens.clone());
        let mut g = AgreeSetGraph::new(4, 4);
        g.seed(&"1000".parse().unwrap());

        assert!(g.assign(0, 1, &gens[0], &closure));
        assert!(g.assign(0, 2, &gens[1], &closure));
        assert!(g.assign(0, 3, &gens[2], &closure));
        assert_eq!(g.validate(), Ok(()));
        assert_eq!(g.num_assigned(), 3);
        assert!(g.unclosed_edges(&closure).is_empty());
    }

    #[test]
    fn test_validate_detects_violation() {
        let gens = sets(&["011", "110"]);
        let closure = GenClosure::new(3, gens.clone());
        let mut g = AgreeSetGraph::new(3, 3);
        assert!(g.assign(0, 1, &gens[0], &closure));
        // Seeding puts every edge into attribute 0, and every node into one component.
        g.seed(&"001".parse().unwrap());
        assert!(g.validate().is_ok());

        // A failed assignment leaves an inconsistent intermediate state behind.
        let mut broken = AgreeSetGraph::new(3, 3);
        let conflicting = sets(&["011", "100", "101"]);
        assert!(broken.assign(0, 1, &conflicting[0], &closure));
        assert!(broken.assign(0, 2, &conflicting[1], &closure));
        assert!(!broken.assign(1, 2, &conflicting[2], &closure));
        let err = broken.validate().unwrap_err();
        assert_eq!(err.attribute, 0);
        assert_eq!((err.a, err.b), (0, 2));
        assert!(err.same_component);
        assert!(!err.carries);
    }

    #[test]
    fn test_dump_state() {
        let g = AgreeSetGraph::new(2, 2);
        let dump = g.dump_state();
        assert!(dump.starts_with("=== AgreeSetGraph State ==="));
        assert!(dump.contains("(0, 1) 00"));
        assert!(dump.contains("att 1: [0 1]"));
        assert!(dump.contains("1: Isolated"));
    }
}
