//! Agree-set graph to DOT (Graphviz) conversion.
//!
//! Nodes are tuples `t0 .. t{n-1}`. Every edge with a non-empty label is drawn with the label
//! as a bit string; assigned edges (those holding a generator) are drawn bold, propagated
//! edges dashed. Edges with empty labels are omitted.
//!
//! # Examples
//!
//! ```
//! use armstrong_rs::attribute::AttributeSet;
//! use armstrong_rs::search::{find_min_agree_set_graph, SearchConfig};
//!
//! let agree_sets: Vec<AttributeSet> = ["011", "110"].iter().map(|s| s.parse().unwrap()).collect();
//! let g = find_min_agree_set_graph(&agree_sets, &SearchConfig::default()).unwrap();
//! let dot = g.to_dot().unwrap();
//! // Render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("graph {"));
//! ```

use std::fmt::Write;

use crate::graph::AgreeSetGraph;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for tuple nodes (default: "circle")
    pub node_shape: &'static str,
    /// Style for assigned edges (default: "bold")
    pub assigned_edge_style: &'static str,
    /// Style for propagated edges (default: "dashed")
    pub propagated_edge_style: &'static str,
    /// Whether to draw edges with empty labels (default: false)
    pub show_empty_edges: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            assigned_edge_style: "bold",
            propagated_edge_style: "dashed",
            show_empty_edges: false,
        }
    }
}

impl AgreeSetGraph {
    /// Converts the graph to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the graph to DOT format.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();

        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        for node in 0..self.num_nodes() {
            writeln!(dot, "t{} [label=\"t{}\"];", node, node)?;
        }

        for (edge, att_set, assigned) in self.edges() {
            if att_set.is_empty() && !assigned && !config.show_empty_edges {
                continue;
            }
            let (a, b) = edge.nodes();
            let style = if assigned {
                config.assigned_edge_style
            } else {
                config.propagated_edge_style
            };
            writeln!(dot, "t{} -- t{} [label=\"{}\", style={}];", a, b, att_set, style)?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeSet;
    use crate::closure::GenClosure;

    fn graph() -> AgreeSetGraph {
        let gens: Vec<AttributeSet> = ["011", "100"].iter().map(|s| s.parse().unwrap()).collect();
        let closure = GenClosure::new(3, gens.clone());
        let mut g = AgreeSetGraph::new(3, 3);
        assert!(g.assign(0, 1, &gens[0], &closure));
        assert!(g.assign(0, 2, &gens[1], &closure));
        g
    }

    #[test]
    fn test_to_dot_basic() {
        let dot = graph().to_dot().unwrap();
        assert!(dot.starts_with("graph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("t0 -- t1 [label=\"011\", style=bold];"));
        assert!(dot.contains("t0 -- t2 [label=\"100\", style=bold];"));
        // (1,2) has an empty label.
        assert!(!dot.contains("t1 -- t2"));
    }

    #[test]
    fn test_to_dot_with_config() {
        let config = DotConfig {
            show_empty_edges: true,
            ..DotConfig::default()
        };
        let dot = graph().to_dot_with_config(&config).unwrap();
        assert!(dot.contains("t1 -- t2 [label=\"000\", style=dashed];"));
    }
}
