use thiserror::Error;

/// Error raised when building or combining Boolean functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoolfError {
    /// The length of a table is not a power of two
    #[error("A table of length {0} does not match any number of variables")]
    InvalidDimension(usize),

    /// The number of variables exceeds [MAX_DIMENSION](crate::tools::MAX_DIMENSION)
    #[error("Tables of {0} variables are not supported")]
    TooManyVariables(usize),

    /// The operands do not share the same number of variables
    #[error("Expected {expected} variables, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// None of the two functions dominates the other
    #[error("The functions are not comparable")]
    Incomparable,

    /// The variable is not part of the function inputs
    #[error("There is no variable x{index} in a function of {dimension} variables")]
    InvalidVariable { index: usize, dimension: usize },

    /// The row is outside of the table
    #[error("Row {row} is outside of a table of length {len}")]
    RowOutOfRange { row: usize, len: usize },

    /// Unexpected character in a truth table
    #[error("The character '{0}' is not a valid truth value")]
    InvalidCharacter(char),

    /// The polynomial is invalid
    #[error("Not a valid polynomial: {0}")]
    InvalidPolynomial(String),
}
