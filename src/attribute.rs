//! Fixed-width attribute sets.
//!
//! An [`AttributeSet`] is a bit vector over the attribute indices `0..width` of a schema.
//! It is the label type of every edge in an [`AgreeSetGraph`][crate::graph::AgreeSetGraph]
//! and the element type of generator families.
//!
//! # Text format
//!
//! Attribute sets are written as bit strings with the **highest** attribute index first,
//! the same convention as `std::bitset` and `boost::dynamic_bitset`:
//!
//! ```
//! use armstrong_rs::attribute::AttributeSet;
//!
//! let s: AttributeSet = "0011".parse().unwrap();
//! assert_eq!(s.width(), 4);
//! assert!(s.contains(0));
//! assert!(s.contains(1));
//! assert!(!s.contains(3));
//! assert_eq!(s.to_string(), "0011");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseAttributeSetError;

/// A set of attributes of a fixed-width schema, backed by a vector of u64 words.
///
/// Bits at positions `>= width` are always clear, so derived equality and hashing
/// agree with set equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeSet {
    /// Number of attributes in the schema.
    width: usize,
    /// Storage: each u64 holds 64 attributes.
    words: Vec<u64>,
}

impl AttributeSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates the empty set over `width` attributes.
    pub fn new(width: usize) -> Self {
        let num_words = width.div_ceil(Self::BITS_PER_WORD);
        Self {
            width,
            words: vec![0; num_words],
        }
    }

    /// Creates the set containing every attribute `0..width`.
    pub fn full(width: usize) -> Self {
        let mut set = Self::new(width);
        for word in &mut set.words {
            *word = u64::MAX;
        }
        set.clear_tail();
        set
    }

    /// Creates a set over `width` attributes from the given attribute indices.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= width`.
    pub fn from_indices(width: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(width);
        for att in indices {
            set.insert(att);
        }
        set
    }

    fn clear_tail(&mut self) {
        let rem = self.width % Self::BITS_PER_WORD;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns the schema width `k`.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of attributes in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns true if every attribute of the schema is set.
    pub fn is_full(&self) -> bool {
        self.len() == self.width
    }

    /// Returns true if attribute `att` is in the set.
    #[inline]
    pub fn contains(&self, att: usize) -> bool {
        if att >= self.width {
            return false;
        }
        let (word_idx, bit_idx) = Self::word_and_bit(att);
        (self.words[word_idx] >> bit_idx) & 1 != 0
    }

    /// Adds attribute `att`. Returns true if it was not previously set.
    ///
    /// # Panics
    ///
    /// Panics if `att >= width`.
    #[inline]
    pub fn insert(&mut self, att: usize) -> bool {
        assert!(att < self.width, "Attribute {} out of range for width {}", att, self.width);
        let (word_idx, bit_idx) = Self::word_and_bit(att);
        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        self.words[word_idx] |= mask;
        was_clear
    }

    /// Subset test `self ⊑ other`: every attribute of `self` is also in `other`.
    pub fn is_subset(&self, other: &AttributeSet) -> bool {
        assert_eq!(self.width, other.width, "Attribute sets of different width");
        self.words.iter().zip(&other.words).all(|(a, b)| a & !b == 0)
    }

    /// Returns `self ∪ other`.
    pub fn union(&self, other: &AttributeSet) -> AttributeSet {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// In-place union.
    pub fn union_with(&mut self, other: &AttributeSet) {
        assert_eq!(self.width, other.width, "Attribute sets of different width");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= b;
        }
    }

    /// Returns `self ∩ other`.
    pub fn intersection(&self, other: &AttributeSet) -> AttributeSet {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// In-place intersection.
    pub fn intersect_with(&mut self, other: &AttributeSet) {
        assert_eq!(self.width, other.width, "Attribute sets of different width");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= b;
        }
    }

    /// Attributes in `self` but not in `other`, in increasing order.
    pub fn difference<'a>(&'a self, other: &'a AttributeSet) -> impl Iterator<Item = usize> + 'a {
        assert_eq!(self.width, other.width, "Attribute sets of different width");
        self.iter().filter(move |&att| !other.contains(att))
    }

    /// Returns an iterator over the attributes in the set, in increasing order.
    pub fn iter(&self) -> AttributeIter<'_> {
        AttributeIter {
            set: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over the attributes of an [`AttributeSet`].
pub struct AttributeIter<'a> {
    set: &'a AttributeSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for AttributeIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * AttributeSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.set.words.len() {
                return None;
            }
            self.current_word = self.set.words[self.word_idx];
        }
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = usize;
    type IntoIter = AttributeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for att in (0..self.width).rev() {
            f.write_str(if self.contains(att) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for AttributeSet {
    type Err = ParseAttributeSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s.trim();
        let width = bits.chars().count();
        let mut set = AttributeSet::new(width);
        for (position, ch) in bits.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => {
                    set.insert(width - 1 - position);
                }
                _ => return Err(ParseAttributeSetError { ch, position }),
            }
        }
        Ok(set)
    }
}
