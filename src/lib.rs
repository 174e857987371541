//! # armstrong-rs: minimum-size Armstrong relations
//!
//! **`armstrong-rs`** synthesizes small *Armstrong relations*: tables whose tuple-pair
//! agreement pattern realizes exactly a given closure system of functional dependencies.
//! Such a table satisfies the given dependencies and nothing more, which makes it a
//! counterexample for every dependency that does not follow from them.
//!
//! ## Agree-sets and generators
//!
//! The *agree-set* of two tuples is the set of attributes on which they have equal values.
//! A family of agree-sets determines a closure system; its *generators* are the members that
//! are not intersections of other members. An Armstrong relation must contain every
//! generator as the agree-set of some tuple pair, and every other agree-set must be closed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use armstrong_rs::attribute::AttributeSet;
//! use armstrong_rs::search::{armstrong_relation, SearchConfig};
//!
//! // Bit strings list the highest attribute first.
//! let agree_sets: Vec<AttributeSet> = ["1011", "1110", "1000"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let table = armstrong_relation(&agree_sets, &SearchConfig::default()).unwrap();
//! assert_eq!(table.num_rows(), 4);
//!
//! // Row pairs agree on exactly the generators and their intersections.
//! let mut found = table.agree_sets();
//! found.sort();
//! assert!(found.contains(&agree_sets[0]));
//! ```
//!
//! ## Core Components
//!
//! - **[`graph`]**: The [`AgreeSetGraph`][crate::graph::AgreeSetGraph], a complete graph whose
//!   edges carry agree-sets, with per-attribute partitions and near-cycle propagation.
//! - **[`search`]**: The backtracking driver over increasing node counts.
//! - **[`closure`]**: Closure operators and generator reduction.
//! - **[`table`]**: The resulting tuple table.

pub mod attribute;
pub mod closure;
pub mod debug;
pub mod dot;
pub mod error;
pub mod graph;
pub mod partition;
pub mod search;
pub mod table;
pub mod types;
pub mod utils;

pub use error::{InvariantViolation, ParseAttributeSetError, SearchError};
