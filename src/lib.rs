//! Define and classify Boolean functions given by their truth table.
//!
//! A [Boolean function](BooleanFunction) of ```n``` variables is stored as a truth table of ```2^n```
//! rows. Row ```i``` gives the value of the function for the assignment encoded by the binary
//! representation of ```i```, where the first variable ```x0``` is the most significant bit.
//! Tables can be parsed from strings of ```0``` and ```1``` characters or built from canonical
//! functions (constants and variables).
//!
//! ```
//! use boolf::BooleanFunction;
//! # use boolf::BoolfError;
//! # fn main() -> Result<(), BoolfError> {
//!
//! // Parse a truth table
//! let maj: BooleanFunction = "0001 0111".parse()?;
//! assert_eq!(maj.dimension(), 3);
//! assert!(maj.eval(&[true, false, true])?);
//!
//! // Build the same function from variables
//! let x0 = BooleanFunction::variable(0, 3)?;
//! let x1 = BooleanFunction::variable(1, 3)?;
//! let x2 = BooleanFunction::variable(2, 3)?;
//! let f = (((&x0 * &x1)? | &(&x0 * &x2)?)? | &(&x1 * &x2)?)?;
//! assert_eq!(f, maj);
//! # Ok(())
//! # }
//! ```
//!
//! # Algebraic normal form
//!
//! The [algebraic normal form](Anf) (or Zhegalkin polynomial) writes a function as a XOR of products
//! of variables. It is computed from the truth table with the Möbius transform, which is its own inverse.
//!
//! ```
//! use boolf::{get_polynom, Anf, BooleanFunction};
//! # use boolf::BoolfError;
//! # fn main() -> Result<(), BoolfError> {
//!
//! let nand: BooleanFunction = "1110".parse()?;
//! assert_eq!(get_polynom(&nand), "1 + x0x1");
//!
//! // Polynomials can also be parsed and converted back into truth tables
//! let anf: Anf = "1 + x0x1".parse()?;
//! assert_eq!(BooleanFunction::from(&anf), nand);
//! # Ok(())
//! # }
//! ```
//!
//! # Classification
//!
//! Functions provide structural predicates: weight and balance, preservation of constants,
//! monotonicity, symmetry, self-duality and linearity. The last five properties define the
//! [maximal clones](PostClass) used by Post's criterion of functional completeness.
//!
//! ```
//! use boolf::{is_complete_system, BooleanFunction, PostClass};
//! # use boolf::BoolfError;
//! # fn main() -> Result<(), BoolfError> {
//!
//! let xor: BooleanFunction = "0110".parse()?;
//! assert!(xor.is_linear() && xor.is_balanced() && !xor.is_monotone());
//! assert_eq!(xor.post_classes(), vec![PostClass::T0, PostClass::Linear]);
//!
//! let nor: BooleanFunction = "1000".parse()?;
//! assert!(nor.is_functionally_complete());
//!
//! let and: BooleanFunction = "0001".parse()?;
//! assert!(is_complete_system(&[and, xor, BooleanFunction::constant_one(2)?]));
//! # Ok(())
//! # }
//! ```
//!
//! # Composition
//!
//! A function of ```N``` variables can be composed with ```N``` functions sharing the same inputs.
//!
//! ```
//! use boolf::BooleanFunction;
//! # use boolf::BoolfError;
//! # fn main() -> Result<(), BoolfError> {
//!
//! let xor: BooleanFunction = "0110".parse()?;
//! let not = xor.compose(&[BooleanFunction::variable(0, 1)?, BooleanFunction::constant_one(1)?])?;
//! assert_eq!(not.to_string(), "10");
//! # Ok(())
//! # }
//! ```

mod anf;
mod classify;
mod convert;
pub mod efmt;
mod error;
mod function;
mod parse;
mod post;
mod table;
pub mod tools;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use anf::Anf;
pub use classify::Dominance;
pub use efmt::get_polynom;
pub use error::BoolfError;
pub use function::BooleanFunction;
pub use post::{is_complete_system, PostClass};
