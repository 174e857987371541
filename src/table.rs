//! Tuple tables.
//!
//! A [`Relation`] is the concrete output of the search: one row per tuple, one column per
//! attribute. Only equality of values within a column matters.

use std::fmt;

use crate::attribute::AttributeSet;
use crate::closure::dedup;

/// A rectangular table of attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    width: usize,
    rows: Vec<Vec<usize>>,
}

impl Relation {
    /// # Panics
    ///
    /// Panics if a row does not have exactly `width` values.
    pub fn new(width: usize, rows: Vec<Vec<usize>>) -> Self {
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "Row {} has {} values, expected {}", i, row.len(), width);
        }
        Self { width, rows }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &[usize] {
        &self.rows[index]
    }

    /// Set of columns on which rows `a` and `b` have equal values.
    pub fn agree_set(&self, a: usize, b: usize) -> AttributeSet {
        let (ra, rb) = (&self.rows[a], &self.rows[b]);
        AttributeSet::from_indices(self.width, (0..self.width).filter(|&att| ra[att] == rb[att]))
    }

    /// Distinct agree-sets over all pairs of distinct rows, in order of first occurrence.
    pub fn agree_sets(&self) -> Vec<AttributeSet> {
        let mut all = Vec::new();
        for b in 1..self.num_rows() {
            for a in 0..b {
                all.push(self.agree_set(a, b));
            }
        }
        dedup(&all)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let values: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", values.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Relation {
        Relation::new(3, vec![vec![0, 0, 0], vec![0, 1, 0], vec![1, 1, 0]])
    }

    #[test]
    fn test_agree_set() {
        let t = table();
        assert_eq!(t.agree_set(0, 1).to_string(), "101");
        assert_eq!(t.agree_set(1, 2).to_string(), "110");
        assert_eq!(t.agree_set(0, 2).to_string(), "100");
        assert_eq!(t.agree_set(2, 0), t.agree_set(0, 2));
    }

    #[test]
    fn test_agree_sets_are_distinct() {
        let t = Relation::new(2, vec![vec![0, 0], vec![0, 1], vec![0, 2]]);
        let sets = t.agree_sets();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].to_string(), "01");
    }

    #[test]
    fn test_display() {
        assert_eq!(table().to_string(), "0 0 0\n0 1 0\n1 1 0\n");
    }

    #[test]
    #[should_panic(expected = "Row 1 has 1 values")]
    fn test_ragged_rows_panic() {
        Relation::new(2, vec![vec![0, 0], vec![0]]);
    }
}
