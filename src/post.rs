//! Functional completeness according to Post's criterion
//!
//! A set of Boolean functions can generate all Boolean functions by composition if and only if
//! it is not included in any of the five maximal clones:
//! * functions preserving zero (T0)
//! * functions preserving one (T1)
//! * monotone functions
//! * self-dual functions
//! * linear (affine) functions

use crate::BooleanFunction;
use log::debug;
use std::fmt;

/// One of the five maximal clones of Boolean functions
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PostClass {
    /// Functions preserving zero
    T0,
    /// Functions preserving one
    T1,
    /// Monotone functions
    Monotone,
    /// Self-dual functions
    SelfDual,
    /// Affine functions
    Linear,
}

impl PostClass {
    /// All maximal clones
    pub const ALL: [PostClass; 5] = [
        PostClass::T0,
        PostClass::T1,
        PostClass::Monotone,
        PostClass::SelfDual,
        PostClass::Linear,
    ];

    /// Test if a function belongs to this class
    pub fn contains(&self, f: &BooleanFunction) -> bool {
        match self {
            PostClass::T0 => f.is_t0(),
            PostClass::T1 => f.is_t1(),
            PostClass::Monotone => f.is_monotone(),
            PostClass::SelfDual => f.is_self_dual(),
            PostClass::Linear => f.is_linear(),
        }
    }
}

impl fmt::Display for PostClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PostClass::T0 => write!(f, "T0"),
            PostClass::T1 => write!(f, "T1"),
            PostClass::Monotone => write!(f, "M"),
            PostClass::SelfDual => write!(f, "S"),
            PostClass::Linear => write!(f, "L"),
        }
    }
}

impl BooleanFunction {
    /// List the maximal clones containing this function
    pub fn post_classes(&self) -> Vec<PostClass> {
        PostClass::ALL
            .into_iter()
            .filter(|class| class.contains(self))
            .collect()
    }

    /// Test if this function alone can generate all Boolean functions by composition.
    ///
    /// ```
    /// # use boolf::BooleanFunction;
    /// let nand: BooleanFunction = "1110".parse().unwrap();
    /// let and: BooleanFunction = "0001".parse().unwrap();
    /// assert!(nand.is_functionally_complete());
    /// assert!(!and.is_functionally_complete());
    /// ```
    pub fn is_functionally_complete(&self) -> bool {
        let classes = self.post_classes();
        debug!("{} belongs to {:?}", self, classes);
        classes.is_empty()
    }
}

/// Test if a set of functions can generate all Boolean functions by composition.
///
/// Each maximal clone must miss at least one function of the set.
///
/// ```
/// # use boolf::{is_complete_system, BooleanFunction};
/// let and: BooleanFunction = "0001".parse().unwrap();
/// let or: BooleanFunction = "0111".parse().unwrap();
/// let not: BooleanFunction = "10".parse().unwrap();
/// assert!(is_complete_system(&[and.clone(), not]));
/// assert!(!is_complete_system(&[and, or]));
/// ```
pub fn is_complete_system(functions: &[BooleanFunction]) -> bool {
    PostClass::ALL.into_iter().all(|class| {
        let escaped = functions.iter().any(|f| !class.contains(f));
        if !escaped {
            debug!("all functions belong to {}", class);
        }
        escaped
    })
}
