//! Fixed-length bit tables shared by truth tables and ANF coefficients

use crate::tools::{dimension_of, rows, table_len};
use crate::BoolfError;
use bit_set::BitSet;
use std::fmt;

/// A sequence of ```2^dimension``` bits, stored as the set of indices of the true bits.
#[derive(Clone, Debug)]
pub(crate) struct Table {
    dimension: usize,
    ones: BitSet,
}

impl Table {
    /// Create a table filled with false values
    pub fn zeros(dimension: usize) -> Result<Self, BoolfError> {
        Ok(Self {
            dimension,
            ones: BitSet::with_capacity(table_len(dimension)?),
        })
    }

    /// Create a table filled with true values
    pub fn ones(dimension: usize) -> Result<Self, BoolfError> {
        Ok(Self {
            dimension,
            ones: (0..table_len(dimension)?).collect(),
        })
    }

    /// Collect a sequence of bits, its length must be a power of two
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Result<Self, BoolfError> {
        let mut ones = BitSet::new();
        let mut len = 0;
        for (idx, b) in bits.into_iter().enumerate() {
            if b {
                ones.insert(idx);
            }
            len = idx + 1;
        }
        let dimension = dimension_of(len).ok_or(BoolfError::InvalidDimension(len))?;
        Ok(Self { dimension, ones })
    }

    /// Take the low bits of a packed integer, higher bits are false
    pub fn from_packed(value: u64, dimension: usize) -> Result<Self, BoolfError> {
        let len = table_len(dimension)?.min(u64::BITS as usize);
        Ok(Self {
            dimension,
            ones: (0..len).filter(|idx| value & (1 << idx) != 0).collect(),
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        rows(self.dimension)
    }

    pub fn get(&self, idx: usize) -> bool {
        self.ones.contains(idx)
    }

    pub fn set(&mut self, idx: usize, value: bool) {
        if value {
            self.ones.insert(idx);
        } else {
            self.ones.remove(idx);
        }
    }

    pub fn toggle(&mut self, idx: usize) {
        if !self.ones.insert(idx) {
            self.ones.remove(idx);
        }
    }

    /// Number of true bits
    pub fn count_ones(&self) -> usize {
        self.ones.len()
    }

    /// Iterate over all bits in index order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |idx| self.ones.contains(idx))
    }

    /// Iterate over the indices of the true bits in increasing order
    pub fn iter_ones(&self) -> bit_set::Iter<'_, u32> {
        self.ones.iter()
    }

    /// Fail if the other table does not have the same dimension
    pub fn check_same_dimension(&self, other: &Self) -> Result<(), BoolfError> {
        if self.dimension != other.dimension {
            return Err(BoolfError::DimensionMismatch {
                expected: self.dimension,
                found: other.dimension,
            });
        }
        Ok(())
    }

    pub fn xor_with(&mut self, other: &Self) {
        self.ones.symmetric_difference_with(&other.ones);
    }

    pub fn and_with(&mut self, other: &Self) {
        self.ones.intersect_with(&other.ones);
    }

    pub fn or_with(&mut self, other: &Self) {
        self.ones.union_with(&other.ones);
    }

    /// Flip all bits
    pub fn flip(&mut self) {
        let mut flipped: BitSet = (0..self.len()).collect();
        flipped.difference_with(&self.ones);
        self.ones = flipped;
    }

    /// Test if all true bits of the other table are also true here
    pub fn contains_all(&self, other: &Self) -> bool {
        self.ones.is_superset(&other.ones)
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.ones.iter().eq(other.ones.iter())
    }
}

impl Eq for Table {}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.iter() {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}
