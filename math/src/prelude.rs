pub use crate::rat;
pub use crate::{
    error::{MathError, RadixError, RationalError},
    radix::{decode, MAX_BASE, MIN_BASE},
    rational::Rational,
};
