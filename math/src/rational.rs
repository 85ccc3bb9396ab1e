//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! Every value is kept in lowest terms with a positive denominator, so
//! chained sums and products cannot accumulate removable factors. That
//! reduction is what keeps long interpolation runs tractable, not a
//! cosmetic nicety.

use std::fmt;
use std::ops::{Add, Mul, Neg};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::rational::Error;

/// Exact fraction of two [`BigInt`]s.
///
/// Invariants: the denominator is strictly positive and
/// `gcd(|numerator|, denominator) == 1`. Both are established by every
/// constructor and preserved by every operation; values are never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

/// Simplifies constructing [`Rational`]s.
///
/// A single argument builds a whole number; two arguments build a
/// fraction and return the fallible [`Rational::new`] result.
///
/// # Examples
///
/// ```
/// use math::prelude::*;
///
/// let half = rat!(1, 2).unwrap();
/// assert_eq!(half.add(&half), rat!(1));
/// ```
#[macro_export]
macro_rules! rat {
    ($numerator:expr) => {
        $crate::rational::Rational::from_integer($numerator)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::rational::Rational::new(
            $numerator.into(),
            $denominator.into(),
        )
    };
}

impl Rational {
    /// Construct `numerator / denominator` in normal form.
    ///
    /// Fails with [`Error::DivisionByZero`] when `denominator` is zero.
    pub fn new(
        numerator: BigInt,
        denominator: BigInt,
    ) -> Result<Self, Error> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::normalized(numerator, denominator))
    }

    /// Normal form of a fraction whose denominator is known nonzero.
    fn normalized(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        let g = numerator.gcd(&denominator);
        if !g.is_one() {
            numerator = numerator / &g;
            denominator = denominator / &g;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// The whole number `value / 1`.
    pub fn from_integer<T: Into<BigInt>>(value: T) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Sum by cross-multiplication, renormalized.
    pub fn add(&self, other: &Self) -> Self {
        let numerator = &self.numerator * &other.denominator
            + &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        Self::normalized(numerator, denominator)
    }

    /// Product with cross-reduction before multiplying.
    ///
    /// Dividing out `gcd(a.num, b.den)` and `gcd(b.num, a.den)` first
    /// bounds the size of the intermediate products across long chains
    /// of multiplications.
    pub fn mul(&self, other: &Self) -> Self {
        let g1 = self.numerator.gcd(&other.denominator);
        let g2 = other.numerator.gcd(&self.denominator);
        let numerator = (&self.numerator / &g1) * (&other.numerator / &g2);
        let denominator =
            (&self.denominator / &g2) * (&other.denominator / &g1);
        Self::normalized(numerator, denominator)
    }

    /// Multiply by the reciprocal of `other`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, Error> {
        let reciprocal = Self::new(
            other.denominator.clone(),
            other.numerator.clone(),
        )?;
        Ok(self.mul(&reciprocal))
    }

    /// Extract the exact integer value.
    ///
    /// Fails with [`Error::NotAnInteger`] unless the denominator divides
    /// the numerator with remainder exactly zero. This is the only
    /// bridge back into the integer domain.
    pub fn into_integer(self) -> Result<BigInt, Error> {
        let (quotient, remainder) =
            self.numerator.div_rem(&self.denominator);
        if !remainder.is_zero() {
            return Err(Error::NotAnInteger {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(quotient)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, other: Self) -> Rational {
        Rational::add(self, other)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, other: Self) -> Rational {
        Rational::mul(self, other)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}
