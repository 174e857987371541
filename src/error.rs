//! Error types for armstrong-rs.
//!
//! Local search failures (an assignment conflict, or an edge whose closure collapses to the
//! full schema) are not errors: [`AgreeSetGraph::assign`][crate::graph::AgreeSetGraph::assign]
//! reports them as `false` and the search backtracks.

use thiserror::Error;

/// Reasons the search driver gives up without producing a relation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The backtracking step budget ran out. The search was abandoned, not exhausted.
    #[error("backtracking budget of {budget} steps exhausted")]
    BudgetExhausted { budget: u64 },

    /// Every node count up to the ceiling was tried without success.
    #[error("no Armstrong relation with at most {max_nodes} tuples")]
    CeilingReached { max_nodes: usize },

    /// The input sets do not share a common schema width.
    #[error("agree-set #{index} has width {found}, expected {expected}")]
    WidthMismatch { index: usize, expected: usize, found: usize },
}

/// A pair of nodes where partition membership and edge label disagree.
///
/// This is never a search outcome: it means propagation is broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "partition invariant violated for attribute {attribute} on edge ({a}, {b}): \
     same component = {same_component}, edge carries attribute = {carries}"
)]
pub struct InvariantViolation {
    pub attribute: usize,
    pub a: usize,
    pub b: usize,
    pub same_component: bool,
    pub carries: bool,
}

/// An attribute-set bit string contained something other than `0` and `1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid character {ch:?} at position {position} in attribute set")]
pub struct ParseAttributeSetError {
    pub ch: char,
    pub position: usize,
}
