//! Some helper functions for the indexing of truth tables
//!
//! Rows of a table over `n` variables are indexed by the big-endian encoding of the
//! assignment: the value of `x0` is the most significant bit of the row index and the
//! value of `x(n-1)` is its least significant bit.

use crate::BoolfError;

/// Number of variables of a table with ```len``` rows, if ```len``` is a power of two.
///
/// ```
/// # use boolf::tools::dimension_of;
/// assert_eq!(dimension_of(1), Some(0));
/// assert_eq!(dimension_of(8), Some(3));
/// assert_eq!(dimension_of(6), None);
/// assert_eq!(dimension_of(0), None);
/// ```
pub fn dimension_of(len: usize) -> Option<usize> {
    if len.is_power_of_two() {
        Some(len.trailing_zeros() as usize)
    } else {
        None
    }
}

/// Largest number of variables of a table built from a number of variables
pub const MAX_DIMENSION: usize = 30;

/// Number of rows in the table of a function of ```dimension``` variables.
///
/// ```
/// # use boolf::tools::{table_len, MAX_DIMENSION};
/// assert_eq!(table_len(3), Ok(8));
/// assert!(table_len(MAX_DIMENSION + 1).is_err());
/// assert!(table_len(64).is_err());
/// ```
pub fn table_len(dimension: usize) -> Result<usize, BoolfError> {
    if dimension > MAX_DIMENSION {
        return Err(BoolfError::TooManyVariables(dimension));
    }
    Ok(rows(dimension))
}

/// Number of rows for a dimension already checked by [table_len]
pub(crate) fn rows(dimension: usize) -> usize {
    1 << dimension
}

/// Bit of the row index carrying the value of variable ```k```, with ```k < dimension```
pub(crate) fn variable_mask(k: usize, dimension: usize) -> usize {
    1 << (dimension - 1 - k)
}

/// Row index of an assignment, the first value being the most significant bit.
///
/// ```
/// # use boolf::tools::row_index;
/// assert_eq!(row_index([true, false, true]), 5);
/// assert_eq!(row_index([false, true]), 1);
/// assert_eq!(row_index([]), 0);
/// ```
pub fn row_index(values: impl IntoIterator<Item = bool>) -> usize {
    values
        .into_iter()
        .fold(0, |row, value| (row << 1) | usize::from(value))
}

/// Assignment corresponding to a row index (inverse of [row_index])
#[cfg(test)]
pub(crate) fn assignment(row: usize, dimension: usize) -> Vec<bool> {
    (0..dimension)
        .map(|k| row & variable_mask(k, dimension) != 0)
        .collect()
}

/// Enumerate all assignments of ```dimension``` variables, in row order
#[cfg(test)]
pub(crate) fn assignments(dimension: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..rows(dimension)).map(move |row| assignment(row, dimension))
}

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn test_row_index() {
        for dimension in 0..5 {
            for row in 0..rows(dimension) {
                let values = assignment(row, dimension);
                assert_eq!(values.len(), dimension);
                assert_eq!(row_index(values), row);
            }
        }
    }

    #[test]
    fn test_masks() {
        assert_eq!(variable_mask(0, 3), 4);
        assert_eq!(variable_mask(2, 3), 1);
        assert_eq!(assignment(4, 3), vec![true, false, false]);
        assert_eq!(dimension_of(rows(5)), Some(5));
    }

    #[test]
    fn test_table_len() {
        assert_eq!(table_len(0), Ok(1));
        assert_eq!(table_len(MAX_DIMENSION), Ok(1 << MAX_DIMENSION));
        assert_eq!(
            table_len(MAX_DIMENSION + 1),
            Err(BoolfError::TooManyVariables(MAX_DIMENSION + 1))
        );
        assert_eq!(table_len(64), Err(BoolfError::TooManyVariables(64)));
    }
}
