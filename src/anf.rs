//! Algebraic normal form (Zhegalkin polynomial) of Boolean functions
//!
//! The ANF writes a Boolean function as a XOR of monomials, where each monomial is
//! a product (AND) of non-negated variables. The ANF of a function is unique.
//!
//! The monomials of a function of ```n``` variables are indexed like the rows of a truth table:
//! monomial ```i``` is the product of the variables whose bit is set in ```i```, ```x0``` being
//! the most significant bit. Monomial ```0``` is the constant term.
//!
//! The conversion between a truth table and its ANF is the Möbius transform: coefficient
//! ```i``` is the XOR of all rows ```j``` such that the bits of ```j``` are a subset of the
//! bits of ```i```. This transform is its own inverse.

use crate::table::Table;
use crate::tools::{rows, variable_mask, MAX_DIMENSION};
use crate::*;

use delegate::delegate;
use log::trace;
use std::fmt;
use std::str::FromStr;

/// The coefficients of the algebraic normal form of a Boolean function.
///
/// ```
/// use boolf::{Anf, BooleanFunction};
/// # use boolf::BoolfError;
/// # fn main() -> Result<(), BoolfError> {
///
/// // x0 | x1 == x0 + x1 + x0x1, written by increasing monomial index
/// let or = "0111".parse::<BooleanFunction>()?;
/// let anf = or.anf();
/// assert_eq!(anf.monomials().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(anf.degree(), Some(2));
/// assert_eq!(anf.to_string(), "x1 + x0 + x0x1");
///
/// // Back to the truth table
/// assert_eq!(BooleanFunction::from(&anf), or);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anf {
    pub(crate) coefficients: Table,
}

impl Anf {
    pub(crate) fn from_table(coefficients: Table) -> Self {
        Self { coefficients }
    }

    /// The null polynomial over ```dimension``` variables
    pub fn zero(dimension: usize) -> Result<Self, BoolfError> {
        Table::zeros(dimension).map(Self::from_table)
    }

    /// Create a polynomial from the list of its coefficients.
    ///
    /// Fails with [BoolfError::InvalidDimension] if the number of coefficients is not a power of two.
    pub fn from_coefficients(coefficients: &[bool]) -> Result<Self, BoolfError> {
        Table::from_bits(coefficients.iter().copied()).map(Self::from_table)
    }

    /// Create a polynomial from coefficients packed in the bits of an integer
    pub fn from_bits(value: u64, dimension: usize) -> Result<Self, BoolfError> {
        Table::from_packed(value, dimension).map(Self::from_table)
    }

    /// Create a polynomial from a list of monomials.
    ///
    /// Each monomial is given as the list of its variables. A monomial appearing twice
    /// cancels out and an empty monomial is the constant term.
    ///
    /// ```
    /// # use boolf::Anf;
    /// let anf = Anf::from_monomials(3, [vec![0, 2], vec![1], vec![]]).unwrap();
    /// assert_eq!(anf.to_string(), "1 + x1 + x0x2");
    /// ```
    pub fn from_monomials<M, V>(dimension: usize, monomials: M) -> Result<Self, BoolfError>
    where
        M: IntoIterator<Item = V>,
        V: IntoIterator<Item = usize>,
    {
        let mut coefficients = Table::zeros(dimension)?;
        for monomial in monomials {
            let mut idx = 0;
            for k in monomial {
                if k >= dimension {
                    return Err(BoolfError::InvalidVariable {
                        index: k,
                        dimension,
                    });
                }
                idx |= variable_mask(k, dimension);
            }
            coefficients.toggle(idx);
        }
        Ok(Self::from_table(coefficients))
    }

    delegate! {
        to self.coefficients {
            /// Number of variables of the polynomial
            pub fn dimension(&self) -> usize;

            /// Number of coefficients, i.e. of potential monomials
            pub fn len(&self) -> usize;
        }
    }

    /// Coefficient of a monomial, if it exists
    pub fn coefficient(&self, monomial: usize) -> Option<bool> {
        if monomial < self.len() {
            Some(self.coefficients.get(monomial))
        } else {
            None
        }
    }

    /// Copy all coefficients
    pub fn to_vec(&self) -> Vec<bool> {
        self.coefficients.iter().collect()
    }

    /// Iterate over the indices of the monomials with a non-null coefficient
    pub fn monomials(&self) -> impl Iterator<Item = usize> + '_ {
        self.coefficients.iter_ones()
    }

    /// Iterate over the variables of a monomial, in increasing order
    pub fn monomial_variables(&self, monomial: usize) -> impl Iterator<Item = usize> {
        let dimension = self.dimension();
        (0..dimension).filter(move |k| monomial & variable_mask(*k, dimension) != 0)
    }

    /// Test if the polynomial has no monomial
    pub fn is_zero(&self) -> bool {
        self.coefficients.count_ones() == 0
    }

    /// Size of the largest monomial, or None for the null polynomial
    pub fn degree(&self) -> Option<usize> {
        self.monomials().map(|m| m.count_ones() as usize).max()
    }

    /// Test if all monomials have at most one variable
    pub fn is_affine(&self) -> bool {
        self.monomials().all(|m| m.count_ones() < 2)
    }

    /// Parse a polynomial for a fixed number of variables
    pub fn parse_with_dimension(descr: &str, dimension: usize) -> Result<Self, BoolfError> {
        let monomials = crate::parse::parse_monomials(descr)?;
        Self::from_monomials(dimension, monomials)
    }
}

/// Apply the Möbius transform in place.
///
/// For each variable, every entry where this variable is set is XORed with the entry
/// where it is cleared. The other entry is never modified during the same pass.
pub(crate) fn mobius(table: &mut Table) {
    trace!("mobius transform over {} variables", table.dimension());
    for bit in 0..table.dimension() {
        let mask = 1 << bit;
        for idx in (0..rows(table.dimension())).filter(|idx| idx & mask != 0) {
            if table.get(idx ^ mask) {
                table.toggle(idx);
            }
        }
    }
}

impl FromStr for Anf {
    type Err = BoolfError;

    /// Parse a polynomial, using the largest variable to guess the number of variables
    fn from_str(descr: &str) -> Result<Self, BoolfError> {
        let monomials = crate::parse::parse_monomials(descr)?;
        let dimension = match monomials.iter().flatten().max() {
            Some(&k) if k >= MAX_DIMENSION => {
                return Err(BoolfError::InvalidPolynomial(format!(
                    "variable x{} exceeds the supported number of variables",
                    k
                )))
            }
            Some(&k) => k + 1,
            None => 0,
        };
        Self::from_monomials(dimension, monomials)
    }
}

impl fmt::Display for Anf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::efmt::DEFAULT_FMT_CFG.write_polynom(f, self)
    }
}

#[cfg(test)]
mod tests {
    use crate::anf::*;
    use crate::function::all_functions;
    use test_log::test;

    /// Reference triangular reduction: emit the first entry, XOR each entry with
    /// its successor and drop the last one, until the buffer is empty.
    fn triangular(mut v: Vec<bool>) -> Vec<bool> {
        let mut result = vec![];
        while !v.is_empty() {
            result.push(v[0]);
            for i in 0..v.len() - 1 {
                v[i] ^= v[i + 1];
            }
            v.pop();
        }
        result
    }

    #[test]
    fn matches_triangular_reduction() {
        for dimension in 0..4 {
            for f in all_functions(dimension) {
                assert_eq!(f.anf().to_vec(), triangular(f.to_vec()));
            }
        }
    }

    #[test]
    fn round_trip() {
        for dimension in 0..4 {
            for f in all_functions(dimension) {
                let anf = f.anf();
                assert_eq!(BooleanFunction::from(&anf), f);
                assert_eq!(
                    BooleanFunction::from_anf_coefficients(&anf.to_vec()).unwrap(),
                    f
                );
            }
        }
    }

    #[test]
    fn known_polynomials() -> Result<(), BoolfError> {
        let xor: BooleanFunction = "0110".parse()?;
        assert_eq!(xor.anf().to_vec(), vec![false, true, true, false]);
        assert_eq!(xor.anf().degree(), Some(1));

        let and: BooleanFunction = "0001".parse()?;
        assert_eq!(and.anf().monomials().collect::<Vec<_>>(), vec![3]);

        let f: BooleanFunction = "01110000".parse()?;
        assert_eq!(
            f.anf().monomials().collect::<Vec<_>>(),
            vec![1, 2, 3, 5, 6, 7]
        );

        let one = BooleanFunction::constant_one(3)?;
        assert_eq!(one.anf().monomials().collect::<Vec<_>>(), vec![0]);
        assert_eq!(one.anf().degree(), Some(0));
        assert_eq!(BooleanFunction::constant_zero(3)?.anf().degree(), None);
        assert!(BooleanFunction::constant_zero(3)?.anf().is_zero());

        let x1 = BooleanFunction::variable(1, 3)?;
        assert_eq!(x1.anf().monomials().collect::<Vec<_>>(), vec![2]);
        Ok(())
    }

    #[test]
    fn monomials() -> Result<(), BoolfError> {
        let anf = Anf::from_monomials(3, [vec![0, 1], vec![2], vec![1, 0]])?;
        assert_eq!(anf.monomials().collect::<Vec<_>>(), vec![1]);

        let anf = Anf::from_monomials(3, [vec![0, 2]])?;
        assert_eq!(anf.monomials().collect::<Vec<_>>(), vec![5]);
        assert_eq!(anf.monomial_variables(5).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(anf.coefficient(5), Some(true));
        assert_eq!(anf.coefficient(4), Some(false));
        assert_eq!(anf.coefficient(8), None);

        assert_eq!(
            Anf::from_monomials(2, [vec![2]]),
            Err(BoolfError::InvalidVariable {
                index: 2,
                dimension: 2
            })
        );
        Ok(())
    }

    #[test]
    fn packed_coefficients() -> Result<(), BoolfError> {
        let anf = Anf::from_bits(14, 3)?;
        assert_eq!(anf.monomials().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(
            BooleanFunction::from_anf_bits(14, 3)?,
            BooleanFunction::from(&anf)
        );
        assert_eq!(Anf::from_coefficients(&[true, false, true]).is_err(), true);
        Ok(())
    }

    #[test]
    fn too_many_variables() {
        assert!(matches!(
            "x64".parse::<Anf>(),
            Err(BoolfError::InvalidPolynomial(_))
        ));
        assert!("x40 + 1".parse::<Anf>().is_err());
        assert!(Anf::from_str(&format!("x{}", MAX_DIMENSION)).is_err());

        assert_eq!(
            Anf::parse_with_dimension("x0", 64),
            Err(BoolfError::TooManyVariables(64))
        );
        assert_eq!(Anf::from_bits(1, 64), Err(BoolfError::TooManyVariables(64)));
        assert_eq!(
            BooleanFunction::from_anf_bits(1, 64),
            Err(BoolfError::TooManyVariables(64))
        );
        assert!(Anf::zero(usize::MAX).is_err());
    }

    #[test]
    fn affine() -> Result<(), BoolfError> {
        assert!(Anf::from_str("1 + x0 + x3")?.is_affine());
        assert!(!Anf::from_str("x0 + x1x2")?.is_affine());
        assert!(Anf::zero(2)?.is_affine());
        Ok(())
    }
}
