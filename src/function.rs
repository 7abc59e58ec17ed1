//! Boolean functions defined by their truth table

use crate::table::Table;
use crate::tools::{rows, row_index, variable_mask};
use crate::*;

use core::ops::{Add, BitOr, Mul, Not};
use delegate::delegate;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// A Boolean function of ```n``` variables, defined by its truth table of ```2^n``` rows.
///
/// Row ```i``` of the table gives the value of the function for the assignment encoded by
/// the binary representation of ```i```, where ```x0``` is the most significant bit.
/// For example, the table ```"0001"``` defines ```x0 & x1``` and ```"0011"``` defines ```x0```.
///
/// Functions are plain values: cloning a function duplicates its table.
/// The XOR (```+```), AND (```*```) and OR (```|```) operators are applied row by row
/// and require both operands to have the same number of variables.
///
/// ```
/// use boolf::BooleanFunction;
/// # use boolf::BoolfError;
/// # fn main() -> Result<(), BoolfError> {
///
/// let x0 = BooleanFunction::variable(0, 2)?;
/// let x1 = BooleanFunction::variable(1, 2)?;
///
/// let xor = (&x0 + &x1)?;
/// let and = (&x0 * &x1)?;
/// assert_eq!(xor, "0110".parse::<BooleanFunction>()?);
/// assert_eq!(and, "0001".parse::<BooleanFunction>()?);
/// assert!(xor.eval(&[true, false])?);
///
/// // In-place operations
/// let mut f = xor.clone();
/// f.or_with(&and)?;
/// assert_eq!(f.to_string(), "0111");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanFunction {
    pub(crate) table: Table,
}

impl BooleanFunction {
    pub(crate) fn from_table(table: Table) -> Self {
        Self { table }
    }

    /// Create the constant false function of ```dimension``` variables
    pub fn new(dimension: usize) -> Result<Self, BoolfError> {
        Self::constant_zero(dimension)
    }

    /// Create the constant false function of ```dimension``` variables.
    ///
    /// Fails with [BoolfError::TooManyVariables] above [MAX_DIMENSION](crate::tools::MAX_DIMENSION).
    pub fn constant_zero(dimension: usize) -> Result<Self, BoolfError> {
        Table::zeros(dimension).map(Self::from_table)
    }

    /// Create the constant true function of ```dimension``` variables
    pub fn constant_one(dimension: usize) -> Result<Self, BoolfError> {
        Table::ones(dimension).map(Self::from_table)
    }

    /// Create the projection on variable ```k``` among ```dimension``` variables.
    ///
    /// The table is made of alternating blocks of false and true rows, starting with
    /// false rows. Blocks are larger for the first variables: ```x0``` is false in the
    /// first half of the table and true in the second half.
    ///
    /// ```
    /// # use boolf::BooleanFunction;
    /// assert_eq!(BooleanFunction::variable(0, 3).unwrap().to_string(), "00001111");
    /// assert_eq!(BooleanFunction::variable(2, 3).unwrap().to_string(), "01010101");
    /// assert!(BooleanFunction::variable(3, 3).is_err());
    /// ```
    pub fn variable(k: usize, dimension: usize) -> Result<Self, BoolfError> {
        if k >= dimension {
            return Err(BoolfError::InvalidVariable {
                index: k,
                dimension,
            });
        }
        let mut table = Table::zeros(dimension)?;
        let mask = variable_mask(k, dimension);
        (0..rows(dimension))
            .filter(|row| row & mask != 0)
            .for_each(|row| table.set(row, true));
        Ok(Self::from_table(table))
    }

    /// Create a function from an explicit list of rows.
    ///
    /// Fails with [BoolfError::InvalidDimension] if the number of rows is not a power of two.
    pub fn from_rows(rows: &[bool]) -> Result<Self, BoolfError> {
        Table::from_bits(rows.iter().copied()).map(Self::from_table)
    }

    /// Create a function from its ANF coefficients.
    ///
    /// The coefficients follow the layout of [Anf]: coefficient ```i``` is associated
    /// to the product of the variables whose bit is set in ```i```.
    pub fn from_anf_coefficients(coefficients: &[bool]) -> Result<Self, BoolfError> {
        Anf::from_coefficients(coefficients).map(|anf| Self::from(&anf))
    }

    /// Create a function from ANF coefficients packed in the bits of an integer.
    ///
    /// Bit ```i``` of ```value``` is the coefficient ```i``` of the ANF. Coefficients
    /// beyond the 64 bits of the integer are null.
    ///
    /// ```
    /// # use boolf::BooleanFunction;
    /// // 1 + x1 + x0
    /// let f = BooleanFunction::from_anf_bits(0b0111, 2).unwrap();
    /// assert_eq!(f.to_string(), "1001");
    /// ```
    pub fn from_anf_bits(value: u64, dimension: usize) -> Result<Self, BoolfError> {
        Anf::from_bits(value, dimension).map(|anf| Self::from(&anf))
    }

    delegate! {
        to self.table {
            /// Number of input variables of this function
            pub fn dimension(&self) -> usize;

            /// Number of rows in the truth table
            pub fn len(&self) -> usize;
        }
    }

    /// Compute the algebraic normal form of this function
    pub fn anf(&self) -> Anf {
        Anf::from(self)
    }

    /// Value of the function on a given row, if it exists
    pub fn get(&self, row: usize) -> Option<bool> {
        if row < self.len() {
            Some(self.table.get(row))
        } else {
            None
        }
    }

    /// Change the value of the function on a given row
    pub fn set(&mut self, row: usize, value: bool) -> Result<(), BoolfError> {
        if row >= self.len() {
            return Err(BoolfError::RowOutOfRange {
                row,
                len: self.len(),
            });
        }
        self.table.set(row, value);
        Ok(())
    }

    /// Iterate over the rows of the truth table
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.table.iter()
    }

    /// Iterate over the rows on which the function is true
    pub fn iter_true_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.table.iter_ones()
    }

    /// Copy the rows of the truth table
    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Evaluate the function for an assignment of all its variables.
    ///
    /// The first value is given to ```x0```.
    pub fn eval(&self, assignment: &[bool]) -> Result<bool, BoolfError> {
        if assignment.len() != self.dimension() {
            return Err(BoolfError::DimensionMismatch {
                expected: self.dimension(),
                found: assignment.len(),
            });
        }
        Ok(self.table.get(row_index(assignment.iter().copied())))
    }

    /// Substitute each variable of this function with an inner function.
    ///
    /// With ```N``` variables in this function and ```N``` inner functions sharing ```m```
    /// input variables, the result is the function of ```m``` variables
    /// ```G(x) = T(f0(x), f1(x), ..., fN-1(x))```.
    ///
    /// ```
    /// # use boolf::BooleanFunction;
    /// # use boolf::BoolfError;
    /// # fn main() -> Result<(), BoolfError> {
    /// let xor = "0110".parse::<BooleanFunction>()?;
    /// let x = BooleanFunction::variable(0, 1)?;
    /// let one = BooleanFunction::constant_one(1)?;
    ///
    /// let g = xor.compose(&[x, one])?;
    /// assert_eq!(g.to_string(), "10");
    /// # Ok(())
    /// # }
    /// ```
    pub fn compose(&self, inner: &[BooleanFunction]) -> Result<Self, BoolfError> {
        if inner.len() != self.dimension() {
            return Err(BoolfError::DimensionMismatch {
                expected: self.dimension(),
                found: inner.len(),
            });
        }
        let dimension = match inner.first() {
            None => return Ok(self.clone()),
            Some(f) => f.dimension(),
        };
        if let Some(f) = inner.iter().find(|f| f.dimension() != dimension) {
            return Err(BoolfError::DimensionMismatch {
                expected: dimension,
                found: f.dimension(),
            });
        }

        debug!(
            "compose {} with {} functions of {} variables",
            self,
            inner.len(),
            dimension
        );
        let mut table = Table::zeros(dimension)?;
        for row in 0..rows(dimension) {
            let outer_row = row_index(inner.iter().map(|f| f.table.get(row)));
            if self.table.get(outer_row) {
                table.set(row, true);
            }
        }
        trace!("composed function: {}", table);
        Ok(Self::from_table(table))
    }

    /// Restrict a variable to a fixed value, giving a function of one less variable
    pub fn restrict(&self, k: usize, value: bool) -> Result<Self, BoolfError> {
        let dimension = self.dimension();
        if k >= dimension {
            return Err(BoolfError::InvalidVariable {
                index: k,
                dimension,
            });
        }
        let mut inner = (0..dimension)
            .filter(|v| *v != k)
            .map(|v| Self::variable(v - usize::from(v > k), dimension - 1))
            .collect::<Result<Vec<_>, _>>()?;
        let fixed = match value {
            true => Self::constant_one(dimension - 1)?,
            false => Self::constant_zero(dimension - 1)?,
        };
        inner.insert(k, fixed);
        self.compose(&inner)
    }

    /// Replace this function with its XOR with another function (addition modulo 2)
    pub fn xor_with(&mut self, other: &Self) -> Result<(), BoolfError> {
        self.table.check_same_dimension(&other.table)?;
        self.table.xor_with(&other.table);
        Ok(())
    }

    /// Replace this function with its conjunction with another function
    pub fn and_with(&mut self, other: &Self) -> Result<(), BoolfError> {
        self.table.check_same_dimension(&other.table)?;
        self.table.and_with(&other.table);
        Ok(())
    }

    /// Replace this function with its disjunction with another function
    pub fn or_with(&mut self, other: &Self) -> Result<(), BoolfError> {
        self.table.check_same_dimension(&other.table)?;
        self.table.or_with(&other.table);
        Ok(())
    }

    /// Flip all rows of the truth table in place
    pub fn complement(&mut self) {
        self.table.flip();
    }
}

impl FromStr for BooleanFunction {
    type Err = BoolfError;

    fn from_str(descr: &str) -> Result<Self, BoolfError> {
        let mut rows = vec![];
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => (), // visual separators
                '0' => rows.push(false),
                '1' => rows.push(true),
                _ => return Err(BoolfError::InvalidCharacter(c)),
            };
        }
        Table::from_bits(rows).map(Self::from_table)
    }
}

impl TryFrom<Vec<bool>> for BooleanFunction {
    type Error = BoolfError;

    fn try_from(rows: Vec<bool>) -> Result<Self, BoolfError> {
        Table::from_bits(rows).map(Self::from_table)
    }
}

impl fmt::Display for BooleanFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for BooleanFunction {
    type Output = Self;
    fn not(mut self) -> Self::Output {
        self.complement();
        self
    }
}

impl Not for &BooleanFunction {
    type Output = BooleanFunction;
    fn not(self) -> Self::Output {
        !self.clone()
    }
}

impl Add<&BooleanFunction> for BooleanFunction {
    type Output = Result<BooleanFunction, BoolfError>;
    fn add(mut self, rhs: &BooleanFunction) -> Self::Output {
        self.xor_with(rhs)?;
        Ok(self)
    }
}

impl Add<&BooleanFunction> for &BooleanFunction {
    type Output = Result<BooleanFunction, BoolfError>;
    fn add(self, rhs: &BooleanFunction) -> Self::Output {
        self.clone() + rhs
    }
}

impl Mul<&BooleanFunction> for BooleanFunction {
    type Output = Result<BooleanFunction, BoolfError>;
    fn mul(mut self, rhs: &BooleanFunction) -> Self::Output {
        self.and_with(rhs)?;
        Ok(self)
    }
}

impl Mul<&BooleanFunction> for &BooleanFunction {
    type Output = Result<BooleanFunction, BoolfError>;
    fn mul(self, rhs: &BooleanFunction) -> Self::Output {
        self.clone() * rhs
    }
}

impl BitOr<&BooleanFunction> for BooleanFunction {
    type Output = Result<BooleanFunction, BoolfError>;
    fn bitor(mut self, rhs: &BooleanFunction) -> Self::Output {
        self.or_with(rhs)?;
        Ok(self)
    }
}

impl BitOr<&BooleanFunction> for &BooleanFunction {
    type Output = Result<BooleanFunction, BoolfError>;
    fn bitor(self, rhs: &BooleanFunction) -> Self::Output {
        self.clone() | rhs
    }
}

/// All functions of a given number of variables
#[cfg(test)]
pub(crate) fn all_functions(dimension: usize) -> impl Iterator<Item = BooleanFunction> {
    use itertools::Itertools;
    (0..rows(dimension))
        .map(|_| [false, true])
        .multi_cartesian_product()
        .map(|rows| BooleanFunction::try_from(rows).unwrap())
}

#[cfg(test)]
mod tests {
    use crate::function::*;
    use crate::tools::{assignments, MAX_DIMENSION};
    use test_log::test;

    #[test]
    fn construct_and_display() -> Result<(), BoolfError> {
        let f: BooleanFunction = "0110".parse()?;
        assert_eq!(f.dimension(), 2);
        assert_eq!(f.len(), 4);
        assert_eq!(format!("{}", f), "0110");
        assert_eq!(f.to_vec(), vec![false, true, true, false]);
        assert_eq!(f, BooleanFunction::from_rows(&[false, true, true, false])?);

        let f: BooleanFunction = "0111 '0000".parse()?;
        assert_eq!(f.dimension(), 3);
        assert_eq!(f.iter_true_rows().collect::<Vec<_>>(), vec![1, 2, 3]);

        assert_eq!(BooleanFunction::new(3)?, BooleanFunction::constant_zero(3)?);
        assert_eq!(BooleanFunction::constant_one(0)?.to_string(), "1");
        Ok(())
    }

    #[test]
    fn invalid_tables() {
        assert_eq!(
            BooleanFunction::from_str("011"),
            Err(BoolfError::InvalidDimension(3))
        );
        assert_eq!(
            BooleanFunction::from_str(""),
            Err(BoolfError::InvalidDimension(0))
        );
        assert_eq!(
            BooleanFunction::from_str("01x0"),
            Err(BoolfError::InvalidCharacter('x'))
        );
        assert!(BooleanFunction::try_from(vec![true; 6]).is_err());
        assert!(BooleanFunction::from_rows(&[true; 8]).is_ok());
    }

    #[test]
    fn too_many_variables() {
        assert_eq!(
            BooleanFunction::constant_one(64),
            Err(BoolfError::TooManyVariables(64))
        );
        assert_eq!(
            BooleanFunction::new(MAX_DIMENSION + 1),
            Err(BoolfError::TooManyVariables(MAX_DIMENSION + 1))
        );
        assert_eq!(
            BooleanFunction::variable(0, 100),
            Err(BoolfError::TooManyVariables(100))
        );
        assert!(BooleanFunction::from_anf_bits(u64::MAX, 40).is_err());
    }

    #[test]
    fn access_rows() -> Result<(), BoolfError> {
        let mut f = BooleanFunction::constant_zero(2)?;
        f.set(3, true)?;
        assert_eq!(f.get(3), Some(true));
        assert_eq!(f.get(0), Some(false));
        assert_eq!(f.get(4), None);
        assert_eq!(
            f.set(4, true),
            Err(BoolfError::RowOutOfRange { row: 4, len: 4 })
        );
        assert_eq!(f.to_string(), "0001");
        Ok(())
    }

    #[test]
    fn variables() -> Result<(), BoolfError> {
        for dimension in 1..5 {
            for k in 0..dimension {
                let v = BooleanFunction::variable(k, dimension)?;
                for values in assignments(dimension) {
                    assert_eq!(v.eval(&values)?, values[k]);
                }
            }
        }
        assert_eq!(BooleanFunction::variable(0, 1)?.to_string(), "01");
        assert_eq!(BooleanFunction::variable(1, 2)?.to_string(), "0101");
        assert_eq!(
            BooleanFunction::variable(0, 0),
            Err(BoolfError::InvalidVariable {
                index: 0,
                dimension: 0
            })
        );
        Ok(())
    }

    #[test]
    fn eval() -> Result<(), BoolfError> {
        let f: BooleanFunction = "00010111".parse()?;
        assert!(!f.eval(&[false, false, true])?);
        assert!(f.eval(&[false, true, true])?);
        assert!(f.eval(&[true, false, true])?);
        assert!(!f.eval(&[true, false, false])?);
        assert_eq!(
            f.eval(&[true]),
            Err(BoolfError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        );
        assert!(BooleanFunction::constant_one(0)?.eval(&[])?);
        Ok(())
    }

    #[test]
    fn algebra() -> Result<(), BoolfError> {
        for a in all_functions(2) {
            let dim = a.dimension();
            assert_eq!((&a + &a)?, BooleanFunction::constant_zero(dim)?);
            assert_eq!((&a * &BooleanFunction::constant_one(dim)?)?, a);
            assert_eq!((&a | &BooleanFunction::constant_zero(dim)?)?, a);
            assert_eq!(!!a.clone(), a);
            for b in all_functions(2) {
                assert_eq!((&a + &b)?, (&b + &a)?);
                assert_eq!((&a * &b)?, (&b * &a)?);
                assert_eq!((&a | &b)?, (&b | &a)?);
                for c in all_functions(2) {
                    assert_eq!(((&a + &b)? + &c)?, (&a + &(&b + &c)?)?);
                    assert_eq!(((&a * &b)? * &c)?, (&a * &(&b * &c)?)?);
                    assert_eq!(((&a | &b)? | &c)?, (&a | &(&b | &c)?)?);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn mismatched_operands() -> Result<(), BoolfError> {
        let mut a: BooleanFunction = "0110".parse()?;
        let b: BooleanFunction = "01".parse()?;
        let mismatch = Err(BoolfError::DimensionMismatch {
            expected: 2,
            found: 1,
        });

        assert_eq!(a.xor_with(&b), mismatch);
        assert_eq!(a.and_with(&b), mismatch);
        assert_eq!(a.or_with(&b), mismatch);
        assert_eq!(a.to_string(), "0110");
        assert!((&a + &b).is_err());
        assert!((&a * &b).is_err());
        assert!((&a | &b).is_err());
        Ok(())
    }

    #[test]
    fn copies_are_independent() -> Result<(), BoolfError> {
        let a: BooleanFunction = "0110".parse()?;
        let mut b = a.clone();
        b.complement();
        assert_eq!(a.to_string(), "0110");
        assert_eq!(b.to_string(), "1001");
        assert_eq!(!&a, b);
        Ok(())
    }

    #[test]
    fn compose() -> Result<(), BoolfError> {
        let xor: BooleanFunction = "0110".parse()?;
        let not = xor.compose(&[
            BooleanFunction::variable(0, 1)?,
            BooleanFunction::constant_one(1)?,
        ])?;
        assert_eq!(not.to_string(), "10");

        // Substituting the projections gives the same function
        let maj: BooleanFunction = "00010111".parse()?;
        let projections = (0..3)
            .map(|k| BooleanFunction::variable(k, 3))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(maj.compose(&projections)?, maj);

        // Swapping the inputs of an implication
        let implies: BooleanFunction = "1101".parse()?;
        let x0 = BooleanFunction::variable(0, 2)?;
        let x1 = BooleanFunction::variable(1, 2)?;
        assert_eq!(implies.compose(&[x1, x0])?.to_string(), "1011");

        // Composition with functions of a different dimension
        let and: BooleanFunction = "0001".parse()?;
        let g = and.compose(&[
            BooleanFunction::variable(0, 3)?,
            (&BooleanFunction::variable(1, 3)? | &BooleanFunction::variable(2, 3)?)?,
        ])?;
        assert_eq!(g.to_string(), "00000111");
        Ok(())
    }

    #[test]
    fn compose_errors() -> Result<(), BoolfError> {
        let and: BooleanFunction = "0001".parse()?;
        assert_eq!(
            and.compose(&[BooleanFunction::constant_one(1)?]),
            Err(BoolfError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            and.compose(&[
                BooleanFunction::constant_one(1)?,
                BooleanFunction::constant_one(2)?
            ]),
            Err(BoolfError::DimensionMismatch {
                expected: 1,
                found: 2
            })
        );
        let one = BooleanFunction::constant_one(0)?;
        assert_eq!(one.compose(&[])?, one);
        Ok(())
    }

    #[test]
    fn restrict() -> Result<(), BoolfError> {
        let maj: BooleanFunction = "00010111".parse()?;
        assert_eq!(maj.restrict(0, false)?.to_string(), "0001");
        assert_eq!(maj.restrict(0, true)?.to_string(), "0111");
        assert_eq!(maj.restrict(2, true)?.to_string(), "0111");

        let f: BooleanFunction = "01000111".parse()?;
        assert_eq!(f.restrict(1, false)?.to_string(), "0101");
        assert!(f.restrict(3, false).is_err());
        Ok(())
    }
}
