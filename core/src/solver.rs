//! Lagrange reconstruction of the shared secret at x = 0.

use num_bigint::BigInt;

use math::prelude::*;

use crate::error::solver::{Error, Result};

/// One share of the hidden polynomial: a sample `(x, f(x))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Reconstruct the secret `f(0)` from the first `threshold` points.
///
/// Points are consumed in the order supplied; nothing is sorted,
/// deduplicated, or checked for distinct x values. Two selected points
/// sharing an x surface as [`RationalError::DivisionByZero`] out of the
/// rational layer, and a point set inconsistent with an integer-valued
/// polynomial surfaces as [`RationalError::NotAnInteger`].
pub fn find_secret(points: &[Point], threshold: usize) -> Result<BigInt> {
    if points.len() < threshold {
        return Err(Error::InsufficientPoints {
            required: threshold,
            provided: points.len(),
        });
    }

    let selected = &points[..threshold];
    let mut sum = Rational::zero();
    for (i, point) in selected.iter().enumerate() {
        let weight = basis_weight_at_zero(selected, i)?;
        let term = Rational::from_integer(point.y.clone()).mul(&weight);
        sum = sum.add(&term);
    }

    Ok(sum.into_integer()?)
}

/// Lagrange basis weight `L_i(0) = prod_{j != i} (0 - x_j) / (x_i - x_j)`.
fn basis_weight_at_zero(points: &[Point], i: usize) -> Result<Rational> {
    let xi = &points[i].x;
    let mut weight = Rational::one();
    for (j, other) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let factor = Rational::new(-&other.x, xi - &other.x)?;
        weight = weight.mul(&factor);
    }
    Ok(weight)
}
