//! Backtracking search for a minimum agree-set graph.
//!
//! The driver tries node counts in increasing order, starting from the smallest `n` whose
//! complete graph has an edge for every generator. For each `n` it assigns the generators in
//! order: the first one to edge `(0, 1)`, every later one to some compatible unassigned edge,
//! cloning the graph before each attempt and recursing into the clone. A global step counter
//! bounds the total work across all node counts.
//!
//! ```
//! use armstrong_rs::attribute::AttributeSet;
//! use armstrong_rs::search::{armstrong_relation, SearchConfig};
//!
//! let agree_sets: Vec<AttributeSet> = ["1011", "1110", "1000"].iter().map(|s| s.parse().unwrap()).collect();
//! let table = armstrong_relation(&agree_sets, &SearchConfig::default()).unwrap();
//! assert_eq!(table.num_rows(), 4);
//! ```

use log::{debug, info};

use crate::attribute::AttributeSet;
use crate::closure::{generators, Closure, GenClosure};
use crate::error::SearchError;
use crate::graph::AgreeSetGraph;
use crate::table::Relation;
use crate::types::Edge;
use crate::utils::{edge_count, min_nodes_for_edges};

/// Configuration of the search driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest node count to try. `None` means one more than the number of generators,
    /// which always admits a solution.
    pub max_nodes: Option<usize>,
    /// Maximum number of recursive search steps, over all node counts.
    pub max_steps: u64,
    /// Skip edge choices that are isomorphic to an already tried one.
    pub symmetry_pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes: None,
            max_steps: u32::MAX as u64,
            symmetry_pruning: true,
        }
    }
}

impl SearchConfig {
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_symmetry_pruning(mut self, enabled: bool) -> Self {
        self.symmetry_pruning = enabled;
        self
    }
}

/// Search state for one generator family.
///
/// The generators and closure operator are supplied by the caller; [`find_min_agree_set_graph`]
/// derives both from raw agree-sets.
pub struct Search<'a, C: ?Sized> {
    generators: &'a [AttributeSet],
    closure: &'a C,
    width: usize,
    config: SearchConfig,
    steps: u64,
}

impl<'a, C> Search<'a, C>
where
    C: Closure + ?Sized,
{
    /// Creates a search over generators of the given schema width.
    pub fn new(width: usize, generators: &'a [AttributeSet], closure: &'a C, config: SearchConfig) -> Self {
        Self {
            generators,
            closure,
            width,
            config,
            steps: 0,
        }
    }

    /// Number of recursive steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Runs the search and returns the smallest graph realizing every generator.
    pub fn run(&mut self) -> Result<AgreeSetGraph, SearchError> {
        if let Some((index, g)) = self.generators.iter().enumerate().find(|(_, g)| g.width() != self.width) {
            return Err(SearchError::WidthMismatch {
                index,
                expected: self.width,
                found: g.width(),
            });
        }

        let min_nodes = min_nodes_for_edges(self.generators.len());
        let max_nodes = self.config.max_nodes.unwrap_or(self.generators.len() + 1);
        let common = self.closure.closure(&AttributeSet::new(self.width));

        for nodes in min_nodes..=max_nodes {
            info!(
                "trying {} nodes ({} edges) for {} generators",
                nodes,
                edge_count(nodes),
                self.generators.len()
            );
            let mut graph = AgreeSetGraph::new(nodes, self.width).with_symmetry_pruning(self.config.symmetry_pruning);
            if !common.is_full() {
                graph.seed(&common);
            }

            let Some(first) = self.generators.first() else {
                return Ok(graph);
            };
            // Nothing can conflict with the first assignment.
            if !graph.assign(0, 1, first, self.closure) {
                debug!("cannot assign {} to (0, 1)", first);
                continue;
            }

            if let Some(solution) = self.extend(graph, 1)? {
                info!("found agree-set graph with {} nodes after {} steps", nodes, self.steps);
                return Ok(solution);
            }
        }

        info!("no agree-set graph with at most {} nodes", max_nodes);
        Err(SearchError::CeilingReached { max_nodes })
    }

    /// Assigns generators `next..` to `graph`, returning the completed graph if possible.
    fn extend(&mut self, graph: AgreeSetGraph, next: usize) -> Result<Option<AgreeSetGraph>, SearchError> {
        self.steps += 1;
        if self.steps > self.config.max_steps {
            info!("backtracking budget of {} steps exhausted", self.config.max_steps);
            return Err(SearchError::BudgetExhausted {
                budget: self.config.max_steps,
            });
        }

        let Some(target) = self.generators.get(next) else {
            return Ok(Some(graph));
        };

        for index in 0..graph.num_edges() {
            let (a, b) = Edge::from_index(index).nodes();
            if !graph.can_assign(a, b, target) {
                continue;
            }
            let mut candidate = graph.clone();
            if !candidate.assign(a, b, target, self.closure) {
                debug!("generator #{} {} rejected on ({}, {})", next, target, a, b);
                continue;
            }
            debug!("generator #{} {} assigned to ({}, {})", next, target, a, b);
            if cfg!(debug_assertions) {
                if let Err(violation) = candidate.validate() {
                    panic!("{}\n{}", violation, candidate.dump_state());
                }
            }
            if let Some(solution) = self.extend(candidate, next + 1)? {
                return Ok(Some(solution));
            }
        }

        Ok(None)
    }
}

/// Finds a minimum agree-set graph for a family of agree-sets.
///
/// The family is deduplicated and reduced to its generators first. All sets must have the
/// same width; an empty family yields a single-node graph.
pub fn find_min_agree_set_graph(
    agree_sets: &[AttributeSet],
    config: &SearchConfig,
) -> Result<AgreeSetGraph, SearchError> {
    let width = agree_sets.first().map_or(0, |s| s.width());
    if let Some((index, s)) = agree_sets.iter().enumerate().find(|(_, s)| s.width() != width) {
        return Err(SearchError::WidthMismatch {
            index,
            expected: width,
            found: s.width(),
        });
    }

    let gens = generators(agree_sets);
    info!("{} agree-sets reduced to {} generators", agree_sets.len(), gens.len());
    let closure = GenClosure::new(width, gens.clone());
    Search::new(width, &gens, &closure, config.clone()).run()
}

/// Builds a minimum Armstrong relation for a family of agree-sets.
pub fn armstrong_relation(agree_sets: &[AttributeSet], config: &SearchConfig) -> Result<Relation, SearchError> {
    find_min_agree_set_graph(agree_sets, config).map(|g| g.to_table())
}
