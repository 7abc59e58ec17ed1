//! Structural properties of Boolean functions

use crate::BooleanFunction;
use crate::BoolfError;
use itertools::Itertools;
use std::cmp::Ordering;

/// Position of two functions in the pointwise order on truth tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dominance {
    /// Both tables are identical
    Equal,

    /// The first function is true on all rows where the second one is true, and on some other rows
    Dominates,

    /// The second function is true on all rows where the first one is true, and on some other rows
    Dominated,

    /// Each function is true on some row where the other one is false
    Incomparable,
}

impl BooleanFunction {
    /// Number of rows on which the function is true (Hamming weight of the table)
    pub fn weight(&self) -> usize {
        self.table.count_ones()
    }

    /// Test if the function is true on exactly half of its rows.
    ///
    /// A function of zero variables has a single row and is never balanced.
    pub fn is_balanced(&self) -> bool {
        self.len() > 1 && 2 * self.weight() == self.len()
    }

    /// Test if the function preserves zero: ```f(0, ..., 0) = 0```
    pub fn is_t0(&self) -> bool {
        !self.table.get(0)
    }

    /// Test if the function preserves one: ```f(1, ..., 1) = 1```
    pub fn is_t1(&self) -> bool {
        self.table.get(self.len() - 1)
    }

    /// Test if the value of the function depends only on the number of true inputs.
    ///
    /// Rows are grouped by Hamming weight and all rows of a group must have the same value.
    /// Note that this is not the same as comparing the table with its reverse: the reversed
    /// table corresponds to the negation of all inputs.
    ///
    /// ```
    /// # use boolf::BooleanFunction;
    /// let maj: BooleanFunction = "00010111".parse().unwrap();
    /// let f: BooleanFunction = "00010011".parse().unwrap();
    /// assert!(maj.is_symmetric());
    /// assert!(!f.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        self.iter()
            .enumerate()
            .into_group_map_by(|(row, _)| row.count_ones())
            .values()
            .all(|group| group.iter().map(|(_, value)| value).all_equal())
    }

    /// Test if ```f(!x) = !f(x)``` for all inputs.
    ///
    /// Negating all inputs maps row ```i``` to row ```len - 1 - i```.
    pub fn is_self_dual(&self) -> bool {
        let len = self.len();
        len > 1 && (0..len / 2).all(|row| self.table.get(row) != self.table.get(len - 1 - row))
    }

    /// Test if the function never decreases when an input switches from false to true.
    ///
    /// The table is split into the half where ```x0``` is false and the half where it is true.
    /// Both halves must be monotone on the remaining variables and the first half must be
    /// below the second one on each row.
    pub fn is_monotone(&self) -> bool {
        self.is_monotone_block(0, self.len())
    }

    fn is_monotone_block(&self, start: usize, len: usize) -> bool {
        if len < 2 {
            return true;
        }
        let half = len / 2;
        (start..start + half).all(|row| !self.table.get(row) || self.table.get(row + half))
            && self.is_monotone_block(start, half)
            && self.is_monotone_block(start + half, half)
    }

    /// Test if the function is affine: its ANF has no monomial with two or more variables
    pub fn is_linear(&self) -> bool {
        self.anf().is_affine()
    }

    /// Degree of the ANF, or None for the constant false function
    pub fn degree(&self) -> Option<usize> {
        self.anf().degree()
    }

    /// Locate this function relative to another one in the pointwise order.
    ///
    /// ```
    /// # use boolf::{BooleanFunction, Dominance};
    /// # use boolf::BoolfError;
    /// # fn main() -> Result<(), BoolfError> {
    /// let and = "0001".parse::<BooleanFunction>()?;
    /// let or = "0111".parse::<BooleanFunction>()?;
    /// let xor = "0110".parse::<BooleanFunction>()?;
    /// assert_eq!(or.dominance(&and)?, Dominance::Dominates);
    /// assert_eq!(and.dominance(&or)?, Dominance::Dominated);
    /// assert_eq!(and.dominance(&xor)?, Dominance::Incomparable);
    /// # Ok(())
    /// # }
    /// ```
    pub fn dominance(&self, other: &Self) -> Result<Dominance, BoolfError> {
        self.table.check_same_dimension(&other.table)?;
        Ok(
            match (
                self.table.contains_all(&other.table),
                other.table.contains_all(&self.table),
            ) {
                (true, true) => Dominance::Equal,
                (true, false) => Dominance::Dominates,
                (false, true) => Dominance::Dominated,
                (false, false) => Dominance::Incomparable,
            },
        )
    }

    /// Test if this function is above another one on every row.
    ///
    /// Fails with [BoolfError::Incomparable] if the two functions are not comparable,
    /// including when they do not have the same number of variables.
    pub fn try_ge(&self, other: &Self) -> Result<bool, BoolfError> {
        match self.dominance(other) {
            Ok(Dominance::Equal) | Ok(Dominance::Dominates) => Ok(true),
            Ok(Dominance::Dominated) => Ok(false),
            Ok(Dominance::Incomparable) | Err(_) => Err(BoolfError::Incomparable),
        }
    }
}

impl PartialOrd for BooleanFunction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.dominance(other).ok()? {
            Dominance::Equal => Some(Ordering::Equal),
            Dominance::Dominates => Some(Ordering::Greater),
            Dominance::Dominated => Some(Ordering::Less),
            Dominance::Incomparable => None,
        }
    }
}
