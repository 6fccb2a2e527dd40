//! Fixed-width GF(2) vectors over the edge space of a graph.
//!
//! An [`EdgeVector`] holds one bit per edge id, packed into `u64` words.
//! Addition over GF(2) is word-level XOR and pivot selection for Gaussian
//! elimination is a leading-zero scan, so both run in `O(m / 64)` word
//! operations for a graph with `m` edges.
use std::fmt;
use std::ops::BitXorAssign;

const WORD_BITS: usize = u64::BITS as usize;

/// A packed bit-vector with one coordinate per edge id.
///
/// Bits at positions `>= len` are always zero; every mutating operation
/// preserves that, which keeps the derived `Eq`/`Hash` meaningful.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EdgeVector {
    words: Vec<u64>,
    len: usize,
}

impl EdgeVector {
    /// Creates the zero vector of width `len`.
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Creates a vector of width `len` with the given bits set.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= len`.
    pub fn from_indices<I>(len: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut v = Self::zeros(len);
        for i in indices {
            v.set(i);
        }
        v
    }

    /// Width of the vector (the edge count of the graph it belongs to).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector has width zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize) {
        assert!(index < self.len, "bit {index} out of range for width {}", self.len);
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Flips bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn toggle(&mut self, index: usize) {
        assert!(index < self.len, "bit {index} out of range for width {}", self.len);
        self.words[index / WORD_BITS] ^= 1u64 << (index % WORD_BITS);
    }

    /// Returns `true` if bit `index` is set. Out-of-range indices read as unset.
    pub fn contains(&self, index: usize) -> bool {
        index < self.len && self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no bit is set.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Index of the highest set bit, or `None` for the zero vector.
    pub fn highest_set_bit(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &w)| w != 0)
            .map(|(i, &w)| i * WORD_BITS + (WORD_BITS - 1 - w.leading_zeros() as usize))
    }

    /// Returns `true` if every bit set in `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &EdgeVector) -> bool {
        self.assert_same_width(other);
        self.words
            .iter()
            .zip(&other.words)
            .all(|(&a, &b)| a & !b == 0)
    }

    /// Sets every bit that is set in `other`.
    pub fn union_with(&mut self, other: &EdgeVector) {
        self.assert_same_width(other);
        for (a, &b) in self.words.iter_mut().zip(&other.words) {
            *a |= b;
        }
    }

    /// Iterates over the indices of the set bits in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    fn assert_same_width(&self, other: &EdgeVector) {
        assert_eq!(
            self.len, other.len,
            "edge vectors of different width cannot be combined"
        );
    }
}

impl BitXorAssign<&EdgeVector> for EdgeVector {
    /// Adds `rhs` over GF(2).
    ///
    /// # Panics
    ///
    /// Panics if the two vectors have different widths.
    fn bitxor_assign(&mut self, rhs: &EdgeVector) {
        self.assert_same_width(rhs);
        for (a, &b) in self.words.iter_mut().zip(&rhs.words) {
            *a ^= b;
        }
    }
}

impl fmt::Debug for EdgeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeVector")
            .field("len", &self.len)
            .field("ones", &self.ones().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for EdgeVector {
    /// Renders the vector as a bit string, edge 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            f.write_str(if self.contains(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of an [`EdgeVector`], see [`EdgeVector::ones`].
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        // clear lowest set bit
        self.current &= self.current - 1;
        Some(self.word_index * WORD_BITS + bit)
    }
}
