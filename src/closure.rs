//! Closure operators over attribute sets.
//!
//! A family of agree-sets generates a closure system: the closed sets are the intersections
//! of members of the family, and the closure of `x` is the smallest closed set containing `x`.
//! [`GenClosure`] computes it from a list of generators, and [`generators`] reduces an
//! arbitrary family to the generators that carry information.
//!
//! ```
//! use armstrong_rs::attribute::AttributeSet;
//! use armstrong_rs::closure::{generators, Closure, GenClosure};
//!
//! let family: Vec<AttributeSet> = ["1011", "1110", "1010"].iter().map(|s| s.parse().unwrap()).collect();
//!
//! // "1010" is the intersection of the other two, so it is not a generator.
//! let gens = generators(&family);
//! assert_eq!(gens.len(), 2);
//!
//! let closure = GenClosure::new(4, gens);
//! let x: AttributeSet = "1000".parse().unwrap();
//! assert_eq!(closure.closure(&x).to_string(), "1010");
//! ```

use log::trace;

use crate::attribute::AttributeSet;

/// A closure operator on attribute sets of a fixed width.
pub trait Closure {
    fn closure(&self, x: &AttributeSet) -> AttributeSet;
}

impl<F> Closure for F
where
    F: Fn(&AttributeSet) -> AttributeSet,
{
    fn closure(&self, x: &AttributeSet) -> AttributeSet {
        self(x)
    }
}

/// Closure operator induced by a list of generators.
///
/// `closure(x)` is the intersection of every generator `g` with `x ⊑ g`. When no generator
/// qualifies the result is the full schema: `x` then only satisfies the trivial dependency.
#[derive(Debug, Clone)]
pub struct GenClosure {
    width: usize,
    generators: Vec<AttributeSet>,
}

impl GenClosure {
    /// # Panics
    ///
    /// Panics if a generator's width differs from `width`.
    pub fn new(width: usize, generators: Vec<AttributeSet>) -> Self {
        for g in &generators {
            assert_eq!(g.width(), width, "Generator {} does not have width {}", g, width);
        }
        Self { width, generators }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn generators(&self) -> &[AttributeSet] {
        &self.generators
    }
}

impl Closure for GenClosure {
    fn closure(&self, x: &AttributeSet) -> AttributeSet {
        intersect_supersets(self.width, x, self.generators.iter())
    }
}

fn intersect_supersets<'a>(
    width: usize,
    x: &AttributeSet,
    family: impl Iterator<Item = &'a AttributeSet>,
) -> AttributeSet {
    let mut result = AttributeSet::full(width);
    for g in family {
        if x.is_subset(g) {
            result.intersect_with(g);
        }
    }
    result
}

/// Removes duplicates from `sets`, keeping the first occurrence of each.
pub fn dedup(sets: &[AttributeSet]) -> Vec<AttributeSet> {
    let mut result: Vec<AttributeSet> = Vec::with_capacity(sets.len());
    for s in sets {
        if !result.contains(s) {
            result.push(s.clone());
        }
    }
    result
}

/// Reduces a family of agree-sets to its generators.
///
/// After deduplication, a set `ag` is a generator iff the closure operator built from all
/// *other* sets does not map `ag` to itself, i.e. `ag` is not an intersection of the others.
/// Input order is preserved. The full schema is never a generator.
pub fn generators(agree_sets: &[AttributeSet]) -> Vec<AttributeSet> {
    let family = dedup(agree_sets);
    let mut result = Vec::new();
    for (i, ag) in family.iter().enumerate() {
        let others = family.iter().enumerate().filter(|&(j, _)| j != i).map(|(_, s)| s);
        let cl = intersect_supersets(ag.width(), ag, others);
        if cl != *ag {
            result.push(ag.clone());
        } else {
            trace!("{} is an intersection of other agree-sets", ag);
        }
    }
    result
}
