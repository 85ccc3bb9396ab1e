use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("invalid digit {digit:?} for base {base}")]
        InvalidDigit { digit: char, base: u32 },
    }
}

pub mod rational {
    use num_bigint::BigInt;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("denominator is zero")]
        DivisionByZero,
        #[error("{numerator}/{denominator} is not an integer")]
        NotAnInteger {
            numerator: BigInt,
            denominator: BigInt,
        },
    }
}

pub use radix::Error as RadixError;
pub use rational::Error as RationalError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Rational(#[from] RationalError),
}

pub type Error = MathError;
