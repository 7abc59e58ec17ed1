//! Formatting API for polynomials

use crate::{Anf, BooleanFunction};
use itertools::Itertools;

use std::fmt;

/// Separators and names used to write a polynomial.
pub struct PolynomFormat<'a> {
    s_sum: &'a str,
    s_product: &'a str,
    s_one: &'a str,
    s_zero: &'a str,
    prefix: &'a str,
}

/// Default style: ```1 + x0 + x1x2```
pub static DEFAULT_FMT_CFG: PolynomFormat = PolynomFormat {
    s_sum: " + ",
    s_product: "",
    s_one: "1",
    s_zero: "0",
    prefix: "x",
};

/// Style with explicit operators: ```1 ^ x0 ^ x1*x2```
pub static XOR_FMT_CFG: PolynomFormat = PolynomFormat {
    s_sum: " ^ ",
    s_product: "*",
    s_one: "1",
    s_zero: "0",
    prefix: "x",
};

/// Wrapper giving a custom [Display](fmt::Display) to a polynomial
pub struct Formatted<'a> {
    anf: &'a Anf,
    cfg: &'a PolynomFormat<'a>,
}

impl PolynomFormat<'_> {
    /// Write a single monomial
    pub fn write_monomial(&self, f: &mut dyn fmt::Write, anf: &Anf, monomial: usize) -> fmt::Result {
        if monomial == 0 {
            return write!(f, "{}", self.s_one);
        }
        let product = anf
            .monomial_variables(monomial)
            .map(|k| format!("{}{}", self.prefix, k))
            .join(self.s_product);
        write!(f, "{}", product)
    }

    /// Write all monomials with a non-null coefficient, by increasing index
    pub fn write_polynom(&self, f: &mut dyn fmt::Write, anf: &Anf) -> fmt::Result {
        if anf.is_zero() {
            return write!(f, "{}", self.s_zero);
        }
        for (pos, monomial) in anf.monomials().enumerate() {
            if pos > 0 {
                write!(f, "{}", self.s_sum)?;
            }
            self.write_monomial(f, anf, monomial)?;
        }
        Ok(())
    }

    pub fn display<'a>(&'a self, anf: &'a Anf) -> Formatted<'a> {
        Formatted { anf, cfg: self }
    }

    /// Write a polynomial in a new string
    pub fn render(&self, anf: &Anf) -> String {
        self.display(anf).to_string()
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.cfg.write_polynom(f, self.anf)
    }
}

/// Render the Zhegalkin polynomial of a function.
///
/// Monomials are written by increasing index in the [Anf] layout. As ```x0``` is the most
/// significant bit of an index, the monomials of the last variables come first: XOR is
/// written ```x1 + x0``` and the function below starts with ```x2```.
///
/// ```
/// # use boolf::{get_polynom, BooleanFunction};
/// let f: BooleanFunction = "01110000".parse().unwrap();
/// assert_eq!(get_polynom(&f), "x2 + x1 + x1x2 + x0x2 + x0x1 + x0x1x2");
/// ```
pub fn get_polynom(f: &BooleanFunction) -> String {
    DEFAULT_FMT_CFG.render(&f.anf())
}

#[cfg(test)]
mod tests {
    use crate::efmt::*;
    use crate::BoolfError;
    use std::str::FromStr;

    #[test]
    fn polynoms() -> Result<(), BoolfError> {
        let xor: BooleanFunction = "0110".parse()?;
        assert_eq!(get_polynom(&xor), "x1 + x0");

        let nand: BooleanFunction = "1110".parse()?;
        assert_eq!(get_polynom(&nand), "1 + x0x1");

        assert_eq!(get_polynom(&BooleanFunction::constant_zero(3)?), "0");
        assert_eq!(get_polynom(&BooleanFunction::constant_one(3)?), "1");
        assert_eq!(get_polynom(&BooleanFunction::constant_zero(0)?), "0");
        assert_eq!(get_polynom(&BooleanFunction::variable(1, 3)?), "x1");
        Ok(())
    }

    #[test]
    fn custom_format() -> Result<(), BoolfError> {
        let maj: BooleanFunction = "00010111".parse()?;
        let anf = maj.anf();
        assert_eq!(anf.to_string(), "x1x2 + x0x2 + x0x1");
        assert_eq!(
            format!("{}", XOR_FMT_CFG.display(&anf)),
            "x1*x2 ^ x0*x2 ^ x0*x1"
        );
        assert_eq!(XOR_FMT_CFG.render(&Anf::from_str("1 + x0x1")?), "1 ^ x0*x1");
        assert_eq!(XOR_FMT_CFG.render(&Anf::zero(2)?), "0");
        assert_eq!(DEFAULT_FMT_CFG.render(&anf), anf.to_string());
        Ok(())
    }
}
